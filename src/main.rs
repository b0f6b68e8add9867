use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod faq;
}
mod interactions {
    pub mod analytics;
    pub mod intro;
    pub mod scroll_reveal;
    pub mod showcase;
    pub mod smooth_scroll;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    // Solid background once the page has scrolled past the hero edge.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                let offset = win.page_y_offset().unwrap_or(0.0);
                                is_scrolled.set(offset > 50.0);
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Clicking anywhere outside the nav closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(MouseEvent)>::new({
                        let menu_open = menu_open.clone();
                        move |e: MouseEvent| {
                            let inside_nav = e
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                                .and_then(|node| {
                                    let nav = web_sys::window()?
                                        .document()?
                                        .get_element_by_id("nav")?;
                                    Some(nav.contains(Some(&node)))
                                })
                                .unwrap_or(false);
                            if !inside_nav {
                                menu_open.set(false);
                            }
                        }
                    });
                    let target = window
                        .document()
                        .map(web_sys::EventTarget::from)
                        .unwrap_or_else(|| window.clone().into());
                    let _ = target.add_event_listener_with_callback(
                        "click",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = target.remove_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav id="nav" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{"Awesome Copy"}</a>

                <button
                    id="nav-toggle"
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="nav-links" class={classes!("nav-links", (*menu_open).then(|| "active"))}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#views" class="nav-link" onclick={close_menu.clone()}>{"Views"}</a>
                    <a href="#testimonials" class="nav-link" onclick={close_menu.clone()}>{"Customers"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu.clone()}>{"FAQ"}</a>
                    <a href="#pricing" class="nav-cta" onclick={close_menu}>{"Get started"}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(250, 250, 255, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 0 #e8e8ef;
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-weight: 700;
                    font-size: 1.2rem;
                    color: #1a1a2e;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #55556d;
                    text-decoration: none;
                    font-weight: 500;
                }

                .nav-link:hover {
                    color: #1a1a2e;
                }

                .nav-cta {
                    background: #5b5bd6;
                    color: #fff;
                    padding: 0.55rem 1.2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #1a1a2e;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.active span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        background: #fff;
                        border-bottom: 1px solid #e8e8ef;
                        padding: 1rem 2rem;
                        display: none;
                    }

                    .nav-links.active {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Awesome Copy landing");
    yew::Renderer::<App>::new().render();
}
