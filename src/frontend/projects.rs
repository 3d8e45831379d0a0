use super::{Reveal, Section, SiteContext};
use crate::content::{project_ordinal, GalleryItem, Project};
use crate::gallery::{GalleryNavigator, ScrollLock, SlideAction};
use crate::i18n::{Lang, ModalLabels};
use gloo_console as console;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Debug, Default)]
struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn acquire(&mut self) {
        set_body_overflow("hidden");
    }

    fn release(&mut self) {
        set_body_overflow("");
    }
}

fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        console::warn!("failed to update body overflow", err);
    }
}

type SharedNavigator = Rc<RefCell<GalleryNavigator<BodyScrollLock>>>;

#[derive(Clone, Debug, PartialEq)]
enum GalleryAction {
    Open(String),
    Slide(SlideAction),
}

fn is_self_target(event: &MouseEvent) -> bool {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    lang: Lang,
    internal_label: AttrValue,
    on_open: Callback<String>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let pointer = use_state(|| None::<(f64, f64)>);
    let project = &props.project;
    let content = project.content(props.lang);

    let onclick = {
        let on_open = props.on_open.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(card) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            pointer.set(Some((
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
            )));
        })
    };

    let onmouseleave = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(None))
    };

    let onkeydown = {
        let on_open = props.on_open.clone();
        let id = project.id.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_open.emit(id.clone());
            }
        })
    };

    let mut style = format!(
        "--accent: {}; --glow: {};",
        project.accent_hex, project.glow_color
    );
    if let Some((x, y)) = *pointer {
        style.push_str(&format!(" --spot-x: {x:.1}px; --spot-y: {y:.1}px;"));
    }

    html! {
        <article
            role="button"
            tabindex="0"
            aria-label={content.title.clone()}
            class={classes!("glass-card", "project-card", pointer.is_some().then_some("is-hovered"))}
            style={style}
            onclick={onclick}
            onkeydown={onkeydown}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            <span class="project-spotlight" aria-hidden="true"></span>
            <span class="project-ordinal" aria-hidden="true">{project_ordinal(props.index)}</span>
            <div class="project-head">
                <span class={classes!("project-icon", project.accent_bg.clone(), project.accent_text.clone())}>
                    {project.icon_kind().glyph()}
                </span>
                if content.url().is_none() {
                    <span class="badge">{"🔒 "}{props.internal_label.clone()}</span>
                }
            </div>
            <h3 class="project-title">{content.title.clone()}</h3>
            <p class={classes!("project-subtitle", project.accent_text.clone())}>{content.subtitle.clone()}</p>
            <p class="project-description">{content.description.clone()}</p>
            <div class="preview-strip">
                { for project.preview_strip().iter().map(|item| html! {
                    <img key={item.image.clone()} src={item.image.clone()} alt={item.label.clone()} loading="lazy" />
                }) }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: Project,
    slides: Vec<GalleryItem>,
    active: usize,
    arrows: bool,
    lang: Lang,
    view_site: AttrValue,
    on_action: Callback<GalleryAction>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let labels = ModalLabels::for_lang(props.lang);
    let project = &props.project;
    let content = project.content(props.lang);
    let len = props.slides.len();
    let Some(slide) = props.slides.get(props.active) else {
        return html! {};
    };

    let emit = |action: SlideAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(GalleryAction::Slide(action.clone())))
    };

    let on_backdrop = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            if is_self_target(&event) {
                on_action.emit(GalleryAction::Slide(SlideAction::Close));
            }
        })
    };

    html! {
        <div class="modal-backdrop" role="dialog" aria-modal="true" onclick={on_backdrop}>
            <div class="modal" style={format!("--accent: {}; --glow: {};", project.accent_hex, project.glow_color)}>
                <header class="modal-header">
                    <span class={classes!("project-icon", project.accent_bg.clone(), project.accent_text.clone())}>
                        {project.icon_kind().glyph()}
                    </span>
                    <div class="modal-title">
                        <h3>{content.title.clone()}</h3>
                        <p class={project.accent_text.clone()}>{content.subtitle.clone()}</p>
                    </div>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label={labels.close}
                        onclick={emit(SlideAction::Close)}
                    >
                        {"✕"}
                    </button>
                </header>

                <div class="modal-stage">
                    <figure key={props.active.to_string()} class="modal-slide">
                        <img src={slide.image.clone()} alt={slide.label.clone()} />
                        <figcaption>{slide.label.clone()}</figcaption>
                    </figure>
                    if props.arrows {
                        <button
                            type="button"
                            class="modal-arrow modal-arrow-prev"
                            aria-label={labels.previous}
                            onclick={emit(SlideAction::Previous)}
                        >
                            {"‹"}
                        </button>
                        <button
                            type="button"
                            class="modal-arrow modal-arrow-next"
                            aria-label={labels.next}
                            onclick={emit(SlideAction::Next)}
                        >
                            {"›"}
                        </button>
                    }
                    <div class="modal-dots">
                        { for (0..len).map(|index| html! {
                            <button
                                key={index.to_string()}
                                type="button"
                                class={classes!("modal-dot", (index == props.active).then_some("is-active"))}
                                aria-label={format!("{} / {}", index + 1, len)}
                                onclick={emit(SlideAction::JumpTo(index))}
                            ></button>
                        }) }
                    </div>
                </div>

                <div class="modal-thumbs">
                    { for props.slides.iter().enumerate().map(|(index, item)| html! {
                        <button
                            key={index.to_string()}
                            type="button"
                            class={classes!("modal-thumb", (index == props.active).then_some("is-active"))}
                            onclick={emit(SlideAction::JumpTo(index))}
                        >
                            <img src={item.image.clone()} alt={item.label.clone()} loading="lazy" />
                            <span class="modal-thumb-label">{item.label.clone()}</span>
                        </button>
                    }) }
                </div>

                <div class="modal-info">
                    <section>
                        <h4>{labels.description}</h4>
                        <p>{content.description.clone()}</p>
                    </section>
                    if let Some(features) = content.features() {
                        <section>
                            <h4>{labels.features}</h4>
                            <p>{features.to_string()}</p>
                        </section>
                    }
                    <section>
                        <h4>{labels.role}</h4>
                        <p>{content.role.clone()}</p>
                    </section>
                    <section>
                        <h4>{labels.result}</h4>
                        <p>{content.result.clone()}</p>
                    </section>
                    <section>
                        <h4>{labels.screens}</h4>
                        <div class="chips">
                            { for props.slides.iter().enumerate().map(|(index, item)| html! {
                                <button
                                    key={index.to_string()}
                                    type="button"
                                    class={classes!("chip", (index == props.active).then_some("is-active"))}
                                    onclick={emit(SlideAction::JumpToLabel(item.label.clone()))}
                                >
                                    {item.label.clone()}
                                </button>
                            }) }
                        </div>
                    </section>
                    if let Some(url) = content.url() {
                        <a class="button-primary" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                            {props.view_site.clone()}{" ↗"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

fn apply_action(
    navigator: &SharedNavigator,
    site: &SiteContext,
    action: GalleryAction,
) -> Result<(), String> {
    let mut navigator = navigator.borrow_mut();
    match action {
        GalleryAction::Open(id) => {
            let project = site
                .content
                .project(&id)
                .ok_or_else(|| format!("unknown project `{id}`"))?;
            navigator.open(project).map_err(|err| err.to_string())
        }
        GalleryAction::Slide(action) => navigator.dispatch(&action).map_err(|err| err.to_string()),
    }
}

#[function_component(Projects)]
pub(super) fn projects() -> Html {
    let site = use_context::<SiteContext>();
    let navigator: SharedNavigator =
        use_mut_ref(|| GalleryNavigator::new(BodyScrollLock::default()));
    let refresh = use_force_update();
    let is_open = navigator.borrow().is_open();

    {
        let navigator = navigator.clone();
        let refresh = refresh.clone();
        use_effect_with(is_open, move |open| {
            let listeners = open.then(window).flatten().map(|win| {
                let on_key = {
                    let navigator = navigator.clone();
                    let refresh = refresh.clone();
                    EventListener::new(&win, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if navigator.borrow_mut().handle_key(&event.key()) {
                            event.prevent_default();
                            refresh.force_update();
                        }
                    })
                };
                let on_leave = ["hashchange", "pagehide"].map(|kind| {
                    let navigator = navigator.clone();
                    let refresh = refresh.clone();
                    EventListener::new(&win, kind, move |_event| {
                        navigator.borrow_mut().close();
                        refresh.force_update();
                    })
                });
                (on_key, on_leave)
            });
            move || drop(listeners)
        });
    }

    let Some(site) = site else {
        return html! {};
    };

    let on_action = {
        let navigator = navigator.clone();
        let site = site.clone();
        let refresh = refresh.clone();
        Callback::from(move |action: GalleryAction| {
            if let Err(err) = apply_action(&navigator, &site, action) {
                console::warn!("gallery action ignored", err);
            }
            refresh.force_update();
        })
    };

    let on_open = on_action.reform(GalleryAction::Open);
    let text = &site.t().projects;

    let modal = {
        let navigator = navigator.borrow();
        navigator
            .view()
            .and_then(|view| {
                site.content
                    .project(view.project_id)
                    .map(|project| (project.clone(), view.index, view.shows_arrows()))
            })
            .map(|(project, active, arrows)| {
                html! {
                    <ProjectModal
                        project={project}
                        slides={navigator.slides().to_vec()}
                        active={active}
                        arrows={arrows}
                        lang={site.lang}
                        view_site={text.view_site.clone()}
                        on_action={on_action.clone()}
                    />
                }
            })
    };

    html! {
        <Section id="projects" title={text.title.clone()}>
            <div class="projects-grid">
                { for site.content.projects().iter().enumerate().map(|(index, project)| html! {
                    <Reveal key={project.id.clone()} delay_ms={(index as u32) * 100}>
                        <ProjectCard
                            project={project.clone()}
                            index={index}
                            lang={site.lang}
                            internal_label={text.internal.clone()}
                            on_open={on_open.clone()}
                        />
                    </Reveal>
                }) }
            </div>
            {modal.unwrap_or_default()}
        </Section>
    }
}
