use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{Project, ProjectLinks, ProjectMedia};
use crate::media::{MediaState, ZoomKind, ZoomTarget};

/// Full-screen detail overlay for a selected project.
///
/// Renders nothing unless the project carries supplementary detail (long
/// description, challenge list, or media) — see [`Project::has_detail`].
/// While open it suppresses page scroll and closes on Escape, backdrop
/// click, or the close control; all interaction state below it lives in one
/// [`MediaState`] recreated per mount.
#[component]
pub fn ProjectModal(
    project: Option<&'static Project>,
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let project = match project {
        Some(p) if p.has_detail() => p,
        _ => return None,
    };

    let state = RwSignal::new(MediaState::new());

    // Page scroll is suppressed for the overlay's lifetime. The cleanup
    // hook restores it on every exit path, including a project swap that
    // tears this component down without `is_open` ever flipping.
    Effect::new(move |_| {
        set_body_overflow(if is_open() { "hidden" } else { "" });
    });
    on_cleanup(|| set_body_overflow(""));

    // Escape closes from anywhere, no matter what holds focus. leptos-use
    // detaches the listener when this component is dropped.
    let _ = use_event_listener(use_window(), ev::keydown, move |evt| {
        if evt.key() == "Escape" {
            on_close.run(());
        }
    });

    Some(view! {
        <Show when=move || is_open()>
            <div
                class="fixed inset-0 bg-black/95 backdrop-blur-md z-[9999]"
                on:click=move |_| on_close.run(())
            ></div>
            <div class="fixed inset-0 md:inset-8 lg:inset-16 z-[10000] overflow-hidden flex items-center justify-center pointer-events-none">
                <div class="bg-dark-900 w-full h-full md:rounded-2xl border-primary/20 md:border-2 overflow-y-auto pointer-events-auto relative">
                    <button
                        class="fixed top-4 right-4 z-[10001] p-3 bg-dark-800/90 border border-primary/30 rounded-xl text-primary hover:bg-primary/20 transition-all duration-300"
                        aria-label="Close modal"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    <div class="p-6 pt-20 md:p-10 lg:p-12 relative">
                        <div class="mb-8 mt-4">
                            <div class="flex flex-wrap items-center gap-2 mb-4">
                                <span class="px-2.5 py-1 bg-primary/20 border border-primary/30 rounded-full text-primary text-[11px] md:text-sm font-mono uppercase tracking-widest leading-none">
                                    {project.kind}
                                </span>
                                <span class="px-2.5 py-1 bg-dark-800 rounded-full text-dark-50 text-[11px] md:text-sm font-mono uppercase tracking-widest leading-none">
                                    {project.status}
                                </span>
                            </div>
                            <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-white mb-4 text-glow leading-tight">
                                {project.title}
                            </h2>
                        </div>
                        {project
                            .links
                            .as_ref()
                            .filter(|links| links.any())
                            .map(|links| view! { <LinksSection links /> })}
                        {project
                            .full_description
                            .map(|text| {
                                view! {
                                    <div class="mb-10">
                                        <h3 class="text-2xl font-bold text-primary mb-4">"About"</h3>
                                        // line breaks in the text are paragraph breaks; no markdown
                                        <div class="text-dark-50 leading-relaxed whitespace-pre-line">
                                            {text}
                                        </div>
                                    </div>
                                }
                            })}
                        {(!project.features.is_empty())
                            .then(|| {
                                view! {
                                    <div class="mb-10">
                                        <h3 class="text-2xl font-bold text-primary mb-4">
                                            "Key Challenges"
                                        </h3>
                                        <ul class="space-y-3">
                                            {project
                                                .features
                                                .iter()
                                                .map(|feature| {
                                                    view! {
                                                        <li class="flex items-start gap-3 text-dark-50">
                                                            <span class="text-primary mt-1.5">"▹"</span>
                                                            <span>{*feature}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })}
                        {(!project.technologies.is_empty())
                            .then(|| {
                                view! {
                                    <div class="mb-10">
                                        <h3 class="text-2xl font-bold text-primary mb-6">
                                            "Tech stack"
                                        </h3>
                                        <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6">
                                            {project
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! {
                                                        <div class="flex flex-col items-center gap-3 p-4 bg-dark-800/50 rounded-xl border border-dark-800 hover:border-primary/30 transition-all duration-300">
                                                            <img
                                                                src=tech.icon
                                                                alt=tech.name
                                                                class="w-16 h-16 object-contain"
                                                            />
                                                            <span class="text-sm font-medium text-dark-50 text-center">
                                                                {tech.name}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}
                        {project
                            .media
                            .as_ref()
                            .map(|media| view! { <MediaSection media state /> })}
                    </div>
                </div>
            </div>
            {move || {
                state
                    .get()
                    .zoom()
                    .map(|target| {
                        view! {
                            <Lightbox
                                target
                                on_dismiss=Callback::new(move |()| {
                                    state.update(|s| s.close_zoom())
                                })
                            />
                        }
                    })
            }}
        </Show>
    })
}

#[component]
fn LinksSection(links: &'static ProjectLinks) -> impl IntoView {
    let link_item = |href: &'static str, label: &'static str| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center gap-2 px-4 py-2 bg-dark-800/50 border border-primary/30 rounded-lg hover:bg-primary/10 hover:border-primary transition-all duration-300"
            >
                <i class="devicon-github-plain text-primary"></i>
                <span class="text-dark-50">{label}</span>
            </a>
        }
    };

    view! {
        <div class="mb-10">
            <h3 class="text-2xl font-bold text-primary mb-4">"Repository"</h3>
            <div class="flex flex-wrap gap-4">
                {links.frontend.map(|href| link_item(href, "Frontend"))}
                {links.backend.map(|href| link_item(href, "Backend"))}
                {links.live.map(|href| link_item(href, "Live"))}
            </div>
        </div>
    }
}

/// Media block: a gallery wins over the single presentation image; a video
/// renders below either, not instead of them.
#[component]
fn MediaSection(media: &'static ProjectMedia, state: RwSignal<MediaState>) -> impl IntoView {
    view! {
        <div class="mb-10 space-y-8 flex flex-col items-center">
            {(!media.gallery.is_empty())
                .then(|| {
                    view! {
                        <GalleryCarousel gallery=media.gallery captions=media.captions state />
                    }
                })}
            {media
                .presentation_image()
                .map(|image| {
                    view! {
                        <img
                            src=image
                            alt="Project presentation"
                            class="rounded-xl border-2 border-primary/20 w-full max-w-4xl cursor-zoom-in"
                            on:click=move |_| {
                                state.update(|s| s.open_zoom(ZoomTarget::image(image)))
                            }
                        />
                    }
                })}
            {media
                .video
                .map(|video| {
                    view! {
                        <video
                            src=video
                            autoplay=true
                            loop=true
                            muted=true
                            playsinline=true
                            class="rounded-xl border-2 border-primary/20 w-full max-w-4xl aspect-video object-contain bg-dark-800 cursor-zoom-in"
                            on:click=move |_| {
                                state.update(|s| s.open_zoom(ZoomTarget::video(video)))
                            }
                        ></video>
                    }
                })}
        </div>
    }
}

#[component]
fn GalleryCarousel(
    gallery: &'static [&'static str],
    captions: &'static [&'static str],
    state: RwSignal<MediaState>,
) -> impl IntoView {
    // Pointer-down position; the delta at release decides swipe vs tap.
    let (drag_origin, set_drag_origin) = signal(None::<(f64, f64)>);

    view! {
        <div class="relative w-full max-w-4xl group">
            <div class="relative aspect-video rounded-xl overflow-hidden border-2 border-primary/20 bg-dark-800 touch-pan-y">
                <img
                    src=move || state.get().current(gallery).unwrap_or_default()
                    alt=move || format!("Gallery image {}", state.get().index() + 1)
                    class="w-full h-full object-contain cursor-zoom-in select-none"
                    draggable="false"
                    on:pointerdown=move |evt| {
                        evt.prevent_default();
                        set_drag_origin(Some((evt.client_x() as f64, evt.client_y() as f64)));
                    }
                    on:pointerup=move |evt| {
                        if let Some((x, y)) = drag_origin.get_untracked() {
                            let dx = evt.client_x() as f64 - x;
                            let dy = evt.client_y() as f64 - y;
                            state.update(|s| s.release(dx, dy, gallery));
                        }
                        set_drag_origin(None);
                    }
                    on:pointercancel=move |_| set_drag_origin(None)
                />
                {(gallery.len() > 1)
                    .then(|| {
                        view! {
                            <button
                                class="absolute left-2 md:left-4 top-1/2 -translate-y-1/2 p-2 bg-dark-900/60 border border-primary/30 rounded-full text-primary hover:bg-primary hover:text-white z-10"
                                aria-label="Previous image"
                                on:click=move |evt| {
                                    evt.stop_propagation();
                                    state.update(|s| s.prev(gallery));
                                }
                            >
                                "‹"
                            </button>
                            <button
                                class="absolute right-2 md:right-4 top-1/2 -translate-y-1/2 p-2 bg-dark-900/60 border border-primary/30 rounded-full text-primary hover:bg-primary hover:text-white z-10"
                                aria-label="Next image"
                                on:click=move |evt| {
                                    evt.stop_propagation();
                                    state.update(|s| s.next(gallery));
                                }
                            >
                                "›"
                            </button>
                            <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                                {(0..gallery.len())
                                    .map(|idx| {
                                        view! {
                                            <button
                                                aria-label=format!("Go to slide {}", idx + 1)
                                                class=move || {
                                                    if state.get().index() == idx {
                                                        "w-6 h-2 rounded-full bg-primary transition-all duration-300"
                                                    } else {
                                                        "w-2 h-2 rounded-full bg-white/30 hover:bg-white/50 transition-all duration-300"
                                                    }
                                                }
                                                on:click=move |evt| {
                                                    evt.stop_propagation();
                                                    state.update(|s| s.select(idx, gallery));
                                                }
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
            {move || {
                captions
                    .get(state.get().index())
                    .copied()
                    .map(|caption| {
                        view! { <p class="mt-4 text-sm text-dark-50 text-center italic">{caption}</p> }
                    })
            }}
        </div>
    }
}

/// Highest stacking layer: one media item, magnified. Dismissing it returns
/// to the detail panel underneath.
#[component]
fn Lightbox(target: ZoomTarget, #[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[20000] flex items-center justify-center p-4 md:p-10">
            <div
                class="absolute inset-0 bg-black/95 backdrop-blur-xl"
                on:click=move |_| on_dismiss.run(())
            ></div>
            <button
                class="absolute top-6 right-6 z-50 p-3 bg-dark-800/80 border border-primary/30 rounded-full text-white hover:bg-primary transition-all"
                aria-label="Close zoom"
                on:click=move |_| on_dismiss.run(())
            >
                "✕"
            </button>
            <div class="relative max-w-full max-h-full flex items-center justify-center rounded-2xl overflow-hidden">
                {match target.kind {
                    ZoomKind::Image => {
                        Either::Left(
                            view! {
                                <img
                                    src=target.url
                                    alt="Zoomed media"
                                    class="max-w-full max-h-[90vh] object-contain rounded-lg"
                                />
                            },
                        )
                    }
                    ZoomKind::Video => {
                        Either::Right(
                            view! {
                                <video
                                    src=target.url
                                    autoplay=true
                                    loop=true
                                    controls=true
                                    class="max-w-full max-h-[90vh] object-contain rounded-lg"
                                ></video>
                            },
                        )
                    }
                }}
            </div>
        </div>
    }
}

// The page-scroll lock is a single process-wide flag; this is its only
// writer. No-op during server rendering, where there is no DOM body.
fn set_body_overflow(value: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(body) = document().body() {
            if body.style().set_property("overflow", value).is_err() {
                log::warn!("failed to update body overflow");
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = value;
    }
}
