use log::info;
use stylist::yew::Global;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod contact;
mod content;
mod navigation;
mod theme;
mod timing {
    pub mod browser;
    pub mod scheduler;
    #[cfg(test)]
    pub mod sim;
}
mod animation {
    pub mod count_up;
    pub mod rotation;
}
mod components {
    pub mod contact_form;
    pub mod count_up;
    pub mod phone_mockup;
    pub mod service_card;
}
mod pages {
    pub mod landing;
}

use navigation::{scroll_to, Section};
use pages::landing::Landing;
use theme::Theme;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SOLID_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |section: Section| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                info!("Scrolling to #{}", section.anchor());
                scroll_to(section);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 20px rgba(8, 31, 92, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: var(--primary);
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: var(--primary-light);
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: var(--primary);
                    }
                    @media (max-width: 900px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #ffffff;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href={Section::Home.href()} class="nav-logo" onclick={go_to(Section::Home)}>
                    {"EMFR Paysage"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Section::MENU.iter().map(|section| html! {
                        <a href={section.href()} class="nav-link" onclick={go_to(*section)}>
                            { section.label() }
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let global_css = use_memo(|_| Theme::load().global_css(), ());

    html! {
        <>
            <Global css={(*global_css).clone()} />
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
