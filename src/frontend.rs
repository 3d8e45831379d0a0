mod projects;

use crate::animation::{
    loading_complete, loading_progress, percent_label, Counter, COUNTER_FRAME_MS,
    LOADING_EXIT_DELAY_MS,
};
use crate::content::{ContentStore, Translations, VCard};
use crate::hero::{floating_snippets, prune_bursts, EasterEgg, ParticleBurst};
use crate::i18n::{Lang, LangState};
use crate::typing::TypingRole;
use gloo_console as console;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Blob, BlobPropertyBag, Element, HtmlAnchorElement, IntersectionObserver,
    IntersectionObserverEntry, MouseEvent, ScrollBehavior, ScrollToOptions, Url,
};
use yew::prelude::*;

use projects::Projects;

const NAV_SCROLLED_OFFSET: f64 = 20.0;
const SCROLL_TOP_OFFSET: f64 = 400.0;
const FRAME_MS: u32 = 16;
const LOADING_FADE_MS: u32 = 500;
const NAME_POP_MS: u32 = 250;
const NAV_SECTIONS: [&str; 5] = ["about", "experience", "stack", "projects", "contact"];

#[derive(Clone)]
struct SiteContext {
    lang: Lang,
    content: Rc<ContentStore>,
    toggle_lang: Callback<()>,
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        self.lang == other.lang
            && Rc::ptr_eq(&self.content, &other.content)
            && self.toggle_lang == other.toggle_lang
    }
}

impl SiteContext {
    fn t(&self) -> &Translations {
        self.content.translations(self.lang)
    }
}

fn apply_lang(lang: Lang) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", lang.html_lang());
        }
    }
}

fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn download_vcard(card: &VCard) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&card.render()));
    let options = BlobPropertyBag::new();
    options.set_type(VCard::MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(&card.file_name());
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)
}

#[hook]
fn use_window_scroll(threshold: f64) -> bool {
    let past = use_state_eq(|| scroll_y() > threshold);
    {
        let past = past.clone();
        use_effect_with(threshold, move |threshold| {
            let threshold = *threshold;
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_event| {
                    past.set(scroll_y() > threshold);
                })
            });
            move || drop(listener)
        });
    }
    *past
}

/// Flips to `true` the first time `node` intersects the viewport and stays there.
#[hook]
fn use_in_view_once(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let observed = node.cast::<Element>().and_then(|element| {
                let on_entries = {
                    let visible = visible.clone();
                    Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let hit = entries.iter().any(|entry| {
                                entry
                                    .unchecked_into::<IntersectionObserverEntry>()
                                    .is_intersecting()
                            });
                            if hit {
                                visible.set(true);
                                observer.disconnect();
                            }
                        },
                    )
                };
                let observer =
                    IntersectionObserver::new(on_entries.as_ref().unchecked_ref()).ok()?;
                observer.observe(&element);
                Some((observer, on_entries))
            });

            if observed.is_none() {
                visible.set(true);
            }

            move || {
                if let Some((observer, _on_entries)) = observed {
                    observer.disconnect();
                }
            }
        });
    }
    *visible
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    delay_ms: u32,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(node.clone());
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("is-visible"), props.class.clone())}
            style={style}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: AttrValue,
    title: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("section", props.class.clone())}>
            <div class="section-inner">
                <Reveal>
                    <h2 class="section-title"><span class="gradient-text">{props.title.clone()}</span></h2>
                </Reveal>
                {props.children.clone()}
            </div>
        </section>
    }
}

#[function_component(SectionDivider)]
fn section_divider() -> Html {
    html! { <div class="section-divider" aria-hidden="true"></div> }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let site = use_context::<SiteContext>();
    let scrolled = use_window_scroll(NAV_SCROLLED_OFFSET);
    let mobile_open = use_state(|| false);
    let Some(site) = site else {
        return html! {};
    };
    let t = site.t();

    let on_toggle_lang = {
        let toggle_lang = site.toggle_lang.clone();
        Callback::from(move |_: MouseEvent| toggle_lang.emit(()))
    };

    let on_toggle_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let on_close_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(false))
    };

    let label_for = |key: &str| -> String {
        match key {
            "about" => t.nav.about.clone(),
            "experience" => t.nav.experience.clone(),
            "stack" => t.nav.stack.clone(),
            "projects" => t.nav.projects.clone(),
            _ => t.nav.contact.clone(),
        }
    };

    html! {
        <>
            <nav class={classes!("navbar", scrolled.then_some("is-scrolled"))}>
                <div class="navbar-inner">
                    <a href="#" class="navbar-logo">
                        <span class="gradient-text">{"A"}</span>{"vin"}
                    </a>
                    <div class="navbar-links">
                        { for NAV_SECTIONS.iter().map(|key| html! {
                            <a key={*key} href={format!("#{key}")}>{label_for(*key)}</a>
                        }) }
                        <button
                            class="lang-toggle"
                            type="button"
                            aria-label={site.lang.toggle_label()}
                            onclick={on_toggle_lang.clone()}
                        >
                            <span aria-hidden="true">{"🌐 "}</span>{site.lang.toggle_caption()}
                        </button>
                    </div>
                    <div class="navbar-mobile">
                        <button
                            class="lang-toggle"
                            type="button"
                            aria-label={site.lang.toggle_label()}
                            onclick={on_toggle_lang}
                        >
                            {"🌐"}
                        </button>
                        <button
                            class="menu-toggle"
                            type="button"
                            aria-expanded={(*mobile_open).to_string()}
                            onclick={on_toggle_menu}
                        >
                            { if *mobile_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
            </nav>
            if *mobile_open {
                <div class="mobile-menu">
                    { for NAV_SECTIONS.iter().enumerate().map(|(i, key)| html! {
                        <a
                            key={*key}
                            href={format!("#{key}")}
                            style={format!("animation-delay: {}ms;", i * 50)}
                            onclick={on_close_menu.clone()}
                        >
                            {label_for(*key)}
                        </a>
                    }) }
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct TypingTextProps {
    lang: Lang,
    roles: Vec<String>,
}

#[function_component(TypingText)]
fn typing_text(props: &TypingTextProps) -> Html {
    let widget = use_state(|| TypingRole::new(props.roles.clone()));

    {
        let widget = widget.clone();
        use_effect_with((props.lang, props.roles.clone()), move |(_, roles)| {
            let mut next = (*widget).clone();
            next.restart(roles.clone());
            widget.set(next);
            || ()
        });
    }

    {
        let handle = widget.clone();
        use_effect_with((*widget).clone(), move |current| {
            let timer = current.next_delay().map(|delay| {
                let mut next = current.clone();
                Timeout::new(delay, move || {
                    next.tick();
                    handle.set(next);
                })
            });
            move || drop(timer)
        });
    }

    html! {
        <span class="typing">
            <span class="gradient-text">{widget.visible_text().to_string()}</span>
            <span class="typing-caret" aria-hidden="true"></span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct NameButtonProps {
    label: AttrValue,
    egg: EasterEgg,
    on_click: Callback<()>,
}

#[function_component(NameButton)]
fn name_button(props: &NameButtonProps) -> Html {
    let popping = use_state_eq(|| false);
    let pop_timer = use_mut_ref(|| None::<Timeout>);
    let bursts = use_state(Vec::<ParticleBurst>::new);
    let next_burst = use_mut_ref(|| 0_u32);

    {
        let setter = bursts.setter();
        use_effect_with((*bursts).clone(), move |current| {
            let earliest = current
                .iter()
                .map(ParticleBurst::expires_at_ms)
                .reduce(f64::min);
            let timer = earliest.map(|expires_at| {
                let delay = (expires_at - now_ms()).max(0.0) as u32;
                let mut remaining = current.clone();
                Timeout::new(delay, move || {
                    prune_bursts(&mut remaining, now_ms().max(expires_at));
                    setter.set(remaining);
                })
            });
            move || drop(timer)
        });
    }

    let onclick = {
        let on_click = props.on_click.clone();
        let popping = popping.clone();
        let pop_timer = pop_timer.clone();
        let bursts = bursts.clone();
        Callback::from(move |_: MouseEvent| {
            on_click.emit(());
            popping.set(true);
            let popping = popping.clone();
            *pop_timer.borrow_mut() = Some(Timeout::new(NAME_POP_MS, move || popping.set(false)));

            let id = {
                let mut next = next_burst.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            let mut spawned = (*bursts).clone();
            spawned.push(ParticleBurst::new(id, now_ms()));
            bursts.set(spawned);
        })
    };

    html! {
        <span class="name-wrap">
            <button
                type="button"
                class={classes!("name-button", "gradient-text", popping.then_some("is-popping"))}
                aria-label={props.label.clone()}
                onclick={onclick}
            >
                {props.label.clone()}
            </button>
            if let Some(dots) = props.egg.progress_dots() {
                <span class="egg-dots" aria-hidden="true">
                    { for dots.into_iter().enumerate().map(|(i, filled)| html! {
                        <span key={i.to_string()} class={classes!("egg-dot", filled.then_some("is-filled"))}></span>
                    }) }
                </span>
            }
            if props.egg.is_active() {
                <span class="egg-flash" aria-hidden="true"></span>
            }
            <span class="particles" aria-hidden="true">
                { for bursts.iter().flat_map(|burst| {
                    burst.particles.iter().enumerate().map(move |(i, particle)| html! {
                        <span key={format!("{}-{i}", burst.id)} class="particle" style={particle.style()}></span>
                    })
                }) }
            </span>
        </span>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let site = use_context::<SiteContext>();
    let egg = use_state(EasterEgg::default);
    let spotlight = use_state(|| (0.0_f64, 0.0_f64));
    let snippets = use_memo((), |_| floating_snippets());
    let Some(site) = site else {
        return html! {};
    };
    let t = site.t();

    let on_name_click = {
        let egg = egg.clone();
        Callback::from(move |()| {
            let mut next = *egg;
            next.register_click();
            egg.set(next);
        })
    };

    let onmousemove = {
        let spotlight = spotlight.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            spotlight.set((
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
            ));
        })
    };

    let roles = egg
        .roles(&t.hero.roles, site.content.easter_egg_roles())
        .to_vec();
    let spotlight_style = format!("--spot-x: {:.1}px; --spot-y: {:.1}px;", spotlight.0, spotlight.1);

    html! {
        <section class="hero grid-bg" onmousemove={onmousemove} style={spotlight_style}>
            <div class="hero-spotlight" aria-hidden="true"></div>
            <div class="floating-code" aria-hidden="true">
                { for snippets.iter().enumerate().map(|(i, snippet)| html! {
                    <span key={i.to_string()} class="floating-snippet" style={snippet.style()}>{snippet.text}</span>
                }) }
            </div>
            <div class="orbit" aria-hidden="true">
                { for [280, 380, 500].into_iter().enumerate().map(|(i, size)| html! {
                    <div
                        key={size.to_string()}
                        class="orbit-ring"
                        style={format!("--size: {size}px; animation-duration: {}s;", 30 + i * 15)}
                    >
                        <span class="orbit-dot"></span>
                    </div>
                }) }
            </div>
            <div class="glow-blob glow-indigo" aria-hidden="true"></div>
            <div class="glow-blob glow-violet" aria-hidden="true"></div>
            <div class="glow-blob glow-cyan" aria-hidden="true"></div>

            <div class="hero-content">
                <p class="hero-greeting rise">{t.hero.greeting.clone()}</p>
                <h1 class="hero-name rise">
                    <NameButton
                        label={t.hero.name.clone()}
                        egg={*egg}
                        on_click={on_name_click}
                    />
                </h1>
                <div class="hero-role rise">
                    <TypingText lang={site.lang} roles={roles} />
                </div>
                <p class="hero-tagline rise">{t.hero.tagline.clone()}</p>
                <div class="hero-actions rise">
                    <a class="button-primary" href="#projects">
                        {t.hero.cta.clone()}<span class="nudge" aria-hidden="true">{" →"}</span>
                    </a>
                    <a class="button-ghost" href="#contact">{"💬 "}{t.hero.contact.clone()}</a>
                </div>
            </div>

            <div class="scroll-hint" aria-hidden="true">
                <span>{"scroll"}</span>
                <span class="scroll-arrow">{"↓"}</span>
            </div>
        </section>
    }
}

#[function_component(Marquee)]
fn marquee() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let items = site.content.marquee();

    html! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee-track">
                { for items.iter().chain(items.iter()).enumerate().map(|(i, item)| html! {
                    <span key={i.to_string()} class="marquee-item">
                        <span class="marquee-dot"></span>{item.clone()}
                    </span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnimatedCounterProps {
    target: u32,
    #[prop_or_default]
    suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone());
    let counter = use_state(|| Counter::new(props.target));

    {
        let counter = counter.clone();
        use_effect_with(in_view, move |in_view| {
            if *in_view {
                let mut next = (*counter).clone();
                if next.start() {
                    counter.set(next);
                }
            }
            || ()
        });
    }

    {
        let handle = counter.clone();
        use_effect_with((*counter).clone(), move |current| {
            let timer = current.is_running().then(|| {
                let mut next = current.clone();
                Timeout::new(COUNTER_FRAME_MS, move || {
                    next.tick();
                    handle.set(next);
                })
            });
            move || drop(timer)
        });
    }

    html! {
        <span ref={node}>{counter.value()}{props.suffix.clone()}</span>
    }
}

#[function_component(About)]
fn about() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let about = &site.t().about;

    html! {
        <Section id="about" title={about.title.clone()}>
            <div class="stats-grid">
                { for about.stats.iter().enumerate().map(|(i, stat)| html! {
                    <Reveal key={stat.label.clone()} class="glass-card stat-card" delay_ms={(i as u32) * 100}>
                        <p class={classes!("stat-value", stat.accent.clone())}>
                            <AnimatedCounter target={stat.value} suffix={stat.suffix.clone()} />
                        </p>
                        <p class="stat-label">{stat.label.clone()}</p>
                    </Reveal>
                }) }
            </div>
            <div class="about-grid">
                <div class="about-text">
                    { for about.paragraphs.iter().enumerate().map(|(i, paragraph)| html! {
                        <Reveal key={i.to_string()} delay_ms={(i as u32) * 80}>
                            <p>{paragraph.clone()}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal class="glass-card languages-card" delay_ms={300}>
                    <h3>{about.languages_title.clone()}</h3>
                    { for about.spoken.iter().map(|language| html! {
                        <div key={language.name.clone()} class="language-row">
                            <div class="language-head">
                                <span>{language.name.clone()}</span>
                                <span class="muted">{language.level.clone()}</span>
                            </div>
                            <div class="language-bar">
                                <div class="language-fill" style={format!("--fill: {}%;", language.percent)}></div>
                            </div>
                        </div>
                    }) }
                </Reveal>
            </div>
        </Section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let experience = &site.t().experience;

    html! {
        <Section id="experience" title={experience.title.clone()}>
            <div class="timeline">
                <Reveal class="timeline-entry" delay_ms={100}>
                    <span class="timeline-dot" aria-hidden="true"></span>
                    <div class="glass-card experience-card">
                        <div class="experience-head">
                            <div>
                                <h3>{"💼 "}{experience.role.clone()}</h3>
                                <p class="experience-company">{experience.company.clone()}</p>
                            </div>
                            <div class="experience-meta">
                                <span class="pill">{"📅 "}{experience.period.clone()}</span>
                                <span class="pill">{"📍 "}{experience.location.clone()}</span>
                            </div>
                        </div>
                        <ul class="experience-bullets">
                            { for experience.bullets.iter().enumerate().map(|(i, bullet)| html! {
                                <li key={i.to_string()} style={format!("animation-delay: {}ms;", 200 + i * 100)}>
                                    <span class="check" aria-hidden="true">{"✓"}</span>
                                    <span>{bullet.clone()}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </Reveal>
            </div>
        </Section>
    }
}

#[function_component(TechStack)]
fn tech_stack() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let stack = &site.t().stack;

    html! {
        <Section id="stack" title={stack.title.clone()}>
            <div class="stack-grid">
                { for stack.categories.iter().enumerate().map(|(i, category)| html! {
                    <Reveal
                        key={category.key.clone()}
                        class={classes!("glass-card", "stack-card", format!("stack-{}", category.key))}
                        delay_ms={(i as u32) * 120}
                    >
                        <h3 class={category.accent.clone()}>{category.label.clone()}</h3>
                        <div class="chips">
                            { for category.items.iter().map(|item| html! {
                                <span key={item.clone()} class="chip">{item.clone()}</span>
                            }) }
                        </div>
                    </Reveal>
                }) }
            </div>
            <Reveal class="glass-card stack-card stack-other" delay_ms={500}>
                <h3 class="text-violet-400">{"✨ "}{stack.other.clone()}</h3>
                <div class="chips">
                    { for stack.other_items.iter().map(|item| html! {
                        <span key={item.clone()} class="chip">{item.clone()}</span>
                    }) }
                </div>
            </Reveal>
        </Section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let contact = &site.t().contact;

    let on_save = {
        let content = site.content.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = download_vcard(content.vcard()) {
                console::error!("vcard download failed", err);
            }
        })
    };

    html! {
        <Section id="contact" title={contact.title.clone()} class="contact">
            <Reveal class="contact-copy" delay_ms={100}>
                <p class="contact-subtitle">{contact.subtitle.clone()}</p>
                <p class="muted">{contact.cta.clone()}</p>
            </Reveal>
            <Reveal class="contact-save" delay_ms={180}>
                <button type="button" class="button-primary" onclick={on_save}>
                    {"👤 "}{contact.save_contact.clone()}
                </button>
            </Reveal>
            <Reveal class="contact-links" delay_ms={300}>
                { for contact.links.iter().map(|link| {
                    let kind = link.contact_kind();
                    let (target, rel) = if link.opens_new_tab() {
                        (Some("_blank"), Some("noopener noreferrer"))
                    } else {
                        (None, None)
                    };
                    html! {
                        <a
                            key={link.kind.clone()}
                            class={classes!("glass-card", "contact-link", format!("contact-{}", kind.as_str()))}
                            href={link.href.clone()}
                            target={target}
                            rel={rel}
                        >
                            <span class="contact-icon" aria-hidden="true">{kind.glyph()}</span>
                            <span class="contact-text">
                                <span class="contact-label">{link.label.clone()}</span>
                                <span class="contact-value">{link.value.clone()}<span class="external-mark" aria-hidden="true">{" ↗"}</span></span>
                            </span>
                        </a>
                    }
                }) }
            </Reveal>
        </Section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p>{format!("© {} Avin. Built with Rust, Yew & WebAssembly.", current_year())}</p>
                <p class="muted">{"Designed & developed by Avin"}</p>
            </div>
        </footer>
    }
}

#[function_component(ScrollToTop)]
fn scroll_to_top_button() -> Html {
    let visible = use_window_scroll(SCROLL_TOP_OFFSET);

    if !visible {
        return html! {};
    }

    html! {
        <button
            type="button"
            class="scroll-top"
            aria-label="Scroll to top"
            onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
        >
            {"↑"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct LoadingScreenProps {
    on_done: Callback<()>,
}

#[function_component(LoadingScreen)]
fn loading_screen(props: &LoadingScreenProps) -> Html {
    let started = use_state(now_ms);
    let frame = use_state(|| (0_u32, 0.0_f64));
    let exiting = use_state_eq(|| false);

    {
        let frame_handle = frame.clone();
        let exiting_handle = exiting.clone();
        let on_done = props.on_done.clone();
        let started = *started;
        use_effect_with((frame.0, *exiting), move |(count, exiting_now)| {
            let elapsed = frame_handle.1;
            let count = *count;
            let timer = if *exiting_now {
                Timeout::new(LOADING_FADE_MS, move || on_done.emit(()))
            } else if loading_complete(elapsed) {
                Timeout::new(LOADING_EXIT_DELAY_MS, move || exiting_handle.set(true))
            } else {
                Timeout::new(FRAME_MS, move || {
                    frame_handle.set((count + 1, now_ms() - started));
                })
            };
            move || drop(timer)
        });
    }

    let progress = loading_progress(frame.1);

    html! {
        <div class={classes!("loader", exiting.then_some("is-exiting"))} aria-hidden="true">
            <div class="loader-logo">
                <span class="gradient-text">{"Avin"}</span>
                <span class="loader-orbit"></span>
            </div>
            <div class="loader-bar">
                <div class="loader-fill" style={format!("width: {progress:.2}%;")}></div>
            </div>
            <p class="loader-percent">{percent_label(progress)}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<ContentStore>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let lang_state = use_state(LangState::default);
    let loading = use_state(|| true);

    {
        let lang = lang_state.lang();
        use_effect_with(lang, move |lang| {
            apply_lang(*lang);
            || ()
        });
    }

    let toggle_lang = {
        let lang_state = lang_state.clone();
        Callback::from(move |()| {
            let mut next = *lang_state;
            next.toggle();
            lang_state.set(next);
        })
    };

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |()| loading.set(false))
    };

    let site = SiteContext {
        lang: lang_state.lang(),
        content: props.content.clone(),
        toggle_lang,
    };

    html! {
        <ContextProvider<SiteContext> context={site}>
            if *loading {
                <LoadingScreen on_done={on_loaded} />
            }
            <Navbar />
            <main>
                <Hero />
                <Marquee />
                <About />
                <SectionDivider />
                <Experience />
                <SectionDivider />
                <TechStack />
                <SectionDivider />
                <Projects />
                <SectionDivider />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
        </ContextProvider<SiteContext>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let content = match ContentStore::load() {
        Ok(content) => Rc::new(content),
        Err(err) => {
            console::error!("failed to load site content", err.to_string());
            return;
        }
    };

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { content },
    )
    .render();
}
