use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::faq::FaqSection;
use crate::interactions::{analytics, intro, scroll_reveal, showcase, smooth_scroll};

fn track_cta(label: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        analytics::track_event("CTA", "click", label);
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount so the intro plays from the hero.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Wire every interaction once the markup below is in the DOM. Each
    // initializer hands back its own teardown.
    {
        use_effect_with_deps(
            move |_| {
                let teardown_intro = intro::init_hero_intro();
                let teardown_showcase = showcase::init_views_showcase();
                let teardown_anchors = smooth_scroll::init_smooth_scroll();
                scroll_reveal::init_scroll_reveal();
                move || {
                    teardown_intro();
                    teardown_showcase();
                    teardown_anchors();
                }
            },
            (),
        );
    }

    html! {
        <div class="landing-page">

            // Full-screen intro: white veil, then the screenshot, then the
            // zoom-out into the hero devices. Hidden entirely on small
            // screens and under reduced motion.
            <div id="intro-overlay" class="intro-overlay">
                <img class="intro-screenshot" src="/assets/editor-screenshot.png" alt="Awesome Copy editor" />
                <div id="intro-white" class="intro-white"></div>
                <div class="intro-hint">{"scroll to begin"}</div>
            </div>

            <header class="hero" id="hero">
                <div class="hero-devices">
                    <img class="hero-device hero-macbook" src="/assets/device-macbook.png" alt="Awesome Copy on MacBook" />
                    <img class="hero-device hero-iphone" src="/assets/device-iphone.png" alt="Awesome Copy on iPhone" />
                    <img class="hero-device hero-ipad" src="/assets/device-ipad.png" alt="Awesome Copy on iPad" />
                </div>
                <div class="hero-content">
                    <h1>{"Copy that sells itself."}</h1>
                    <p class="hero-subtitle">
                        {"Awesome Copy turns rough notes into landing pages, ads and emails your customers actually read."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#pricing" class="btn btn-primary" onclick={track_cta("Start writing free")}>
                            {"Start writing free"}
                        </a>
                        <a href="#views" class="btn btn-ghost" onclick={track_cta("See it in action")}>
                            {"See it in action"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="feature-grid" id="features">
                <h2 class="scroll-reveal">{"Everything between idea and publish"}</h2>
                <div class="feature-cards">
                    <div class="feature-card scroll-reveal">
                        <h3>{"Drafts that start themselves"}</h3>
                        <p>{"Drop in a product description and get a full page of headline options, benefit blurbs and CTAs to react to."}</p>
                    </div>
                    <div class="feature-card scroll-reveal">
                        <h3>{"Your voice, kept"}</h3>
                        <p>{"Awesome Copy learns tone from the copy you approve, so the tenth draft sounds like the first one you loved."}</p>
                    </div>
                    <div class="feature-card scroll-reveal">
                        <h3>{"Variants without the mess"}</h3>
                        <p>{"A/B versions live side by side in card view instead of in seventeen tabs and a spreadsheet."}</p>
                    </div>
                    <div class="feature-card scroll-reveal">
                        <h3>{"Export anywhere"}</h3>
                        <p>{"Plain text, markdown or straight to your CMS. No lock-in, no reformatting."}</p>
                    </div>
                </div>
            </section>

            // Sticky showcase: the section is taller than the viewport so
            // the inner block pins while scroll position drives the view.
            <section class="feature-views" id="views">
                <div class="views-sticky">
                    <h2>{"One editor, three ways to see your copy"}</h2>
                    <div class="views-showcase">
                        <div class="view-switcher">
                            <div class="view-btn-indicator"></div>
                            <button class="view-btn" data-view="minimal">{"Minimal"}</button>
                            <button class="view-btn" data-view="normal">{"Normal"}</button>
                            <button class="view-btn active" data-view="card">{"Card"}</button>
                        </div>
                        <div class="view-stage">
                            <img class="view-image active" data-view="card" src="/assets/view-card.png" alt="Card view" />
                            <img class="view-image" data-view="normal" src="/assets/view-normal.png" alt="Normal view" />
                            <img class="view-image" data-view="minimal" src="/assets/view-minimal.png" alt="Minimal view" />
                        </div>
                    </div>
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <h2 class="scroll-reveal">{"Writers who stopped staring at blank pages"}</h2>
                <div class="testimonial-grid">
                    <div class="testimonial-card scroll-reveal">
                        <p>{"\"I shipped the new pricing page in an afternoon. It used to take me a week of dread.\""}</p>
                        <span class="testimonial-author">{"Maya, solo founder"}</span>
                    </div>
                    <div class="testimonial-card scroll-reveal">
                        <p>{"\"Card view alone is worth it. Our whole team reviews variants in one place now.\""}</p>
                        <span class="testimonial-author">{"Jonas, growth lead"}</span>
                    </div>
                    <div class="testimonial-card scroll-reveal">
                        <p>{"\"The drafts actually sound like us. I edit instead of rewriting from scratch.\""}</p>
                        <span class="testimonial-author">{"Priya, content manager"}</span>
                    </div>
                </div>
            </section>

            <FaqSection />

            <section class="pricing-cta" id="pricing">
                <h2 class="scroll-reveal">{"Write the page you've been putting off"}</h2>
                <p class="scroll-reveal">{"Free for three projects. No card, no trial clock."}</p>
                <a href="#hero" class="btn btn-primary" onclick={track_cta("Get Awesome Copy")}>
                    {"Get Awesome Copy"}
                </a>
            </section>

            <footer class="footer">
                <span>{"© 2025 Awesome Copy"}</span>
                <div class="footer-links">
                    <a href="#features">{"Features"}</a>
                    <a href="#views">{"Views"}</a>
                    <a href="#faq">{"FAQ"}</a>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    color: #1a1a2e;
                    background: #fafaff;
                    overflow-x: hidden;
                }

                .landing-page h1,
                .landing-page h2,
                .landing-page h3 {
                    font-weight: 700;
                    letter-spacing: -0.02em;
                }

                .btn {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 10px;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .btn:hover {
                    transform: translateY(-2px);
                }

                .btn-primary {
                    background: #5b5bd6;
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(91, 91, 214, 0.35);
                }

                .btn-ghost {
                    color: #5b5bd6;
                    border: 1px solid #c9c9ea;
                    background: #fff;
                }

                /* ---- intro overlay ---- */

                .intro-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 1.2s cubic-bezier(0.22, 1, 0.36, 1),
                                opacity 1.2s ease;
                }

                .intro-overlay.zoom-out {
                    transform: scale(0.42) translateY(-6%);
                    opacity: 0;
                }

                .intro-overlay.hidden {
                    display: none;
                }

                .intro-screenshot {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 1.2s ease;
                }

                .intro-screenshot.visible {
                    opacity: 1;
                }

                .intro-white {
                    position: absolute;
                    inset: 0;
                    background: #fff;
                    transition: opacity 1.2s ease;
                }

                .intro-white.fade-out {
                    opacity: 0;
                    pointer-events: none;
                }

                .intro-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #9a9ab8;
                    font-size: 0.9rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    animation: hint-bob 2s ease-in-out infinite;
                }

                @keyframes hint-bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 8px); }
                }

                /* ---- hero ---- */

                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                }

                .hero-devices {
                    position: relative;
                    display: flex;
                    align-items: flex-end;
                    justify-content: center;
                    opacity: 0;
                    transform: translateY(40px) scale(0.96);
                    transition: opacity 0.9s ease, transform 0.9s ease;
                }

                .hero-devices.revealed {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }

                .hero-macbook {
                    width: min(720px, 70vw);
                }

                .hero-iphone {
                    width: 140px;
                    transform: translateX(30px) rotate(-3deg);
                }

                .hero-ipad {
                    width: 220px;
                    transform: translateX(-30px) rotate(3deg);
                }

                .hero-content {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                    margin-top: 2.5rem;
                }

                .hero-content.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .hero h1 {
                    font-size: clamp(2.4rem, 5vw, 4rem);
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #55556d;
                    max-width: 560px;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                @media (max-width: 1024px) {
                    .hero-devices {
                        display: none;
                    }

                    .hero {
                        padding-top: 6rem;
                    }
                }

                /* ---- scroll reveal ---- */

                .scroll-reveal {
                    opacity: 0;
                    transform: translateY(28px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .scroll-reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                /* ---- feature grid ---- */

                .feature-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .feature-grid h2 {
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                }

                .feature-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    text-align: left;
                }

                .feature-card {
                    background: #fff;
                    border: 1px solid #e8e8ef;
                    border-radius: 14px;
                    padding: 1.8rem;
                }

                .feature-card h3 {
                    font-size: 1.2rem;
                    margin-bottom: 0.6rem;
                }

                .feature-card p {
                    color: #55556d;
                    line-height: 1.55;
                }

                /* ---- views showcase ---- */

                .feature-views {
                    /* Extra height is the scroll runway for the sticky stage. */
                    height: 250vh;
                    position: relative;
                }

                .views-sticky {
                    position: sticky;
                    top: 0;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 4rem 2rem;
                }

                .views-sticky h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2.5rem;
                    text-align: center;
                }

                .views-showcase {
                    width: min(960px, 90vw);
                }

                .view-switcher {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 4px;
                    background: #ececf4;
                    border-radius: 12px;
                    padding: 4px;
                    margin: 0 auto 2rem;
                    max-width: 420px;
                }

                .view-btn {
                    position: relative;
                    z-index: 1;
                    border: none;
                    background: none;
                    padding: 0.7rem 0;
                    font-size: 1rem;
                    font-weight: 600;
                    color: #55556d;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .view-btn.active {
                    color: #1a1a2e;
                }

                .view-btn-indicator {
                    position: absolute;
                    top: 4px;
                    bottom: 4px;
                    left: 4px;
                    width: calc((100% - 16px) / 3);
                    background: #fff;
                    border-radius: 9px;
                    box-shadow: 0 2px 8px rgba(26, 26, 46, 0.12);
                    transition: transform 0.35s cubic-bezier(0.22, 1, 0.36, 1);
                    /* Initial position matches the default Card view (slot 2). */
                    transform: translateX(calc(200% + 8px));
                }

                .view-stage {
                    position: relative;
                    aspect-ratio: 16 / 10;
                }

                .view-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 16px;
                    border: 1px solid #e8e8ef;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .view-image.active {
                    opacity: 1;
                }

                @media (max-width: 1024px) {
                    /* No sticky runway: the showcase auto-plays instead. */
                    .feature-views {
                        height: auto;
                    }

                    .views-sticky {
                        position: static;
                        min-height: 0;
                    }
                }

                /* ---- testimonials ---- */

                .testimonials {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .testimonials h2 {
                    font-size: 2.5rem;
                    margin-bottom: 3rem;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .testimonial-card {
                    background: #fff;
                    border: 1px solid #e8e8ef;
                    border-radius: 14px;
                    padding: 1.8rem;
                    text-align: left;
                }

                .testimonial-card p {
                    color: #33334d;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .testimonial-author {
                    color: #9a9ab8;
                    font-size: 0.95rem;
                }

                /* ---- pricing / footer ---- */

                .pricing-cta {
                    text-align: center;
                    padding: 6rem 2rem;
                }

                .pricing-cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }

                .pricing-cta p {
                    color: #55556d;
                    margin-bottom: 2rem;
                }

                .footer {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    color: #9a9ab8;
                    border-top: 1px solid #e8e8ef;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: #9a9ab8;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #5b5bd6;
                }

                @media (max-width: 768px) {
                    .feature-grid h2,
                    .testimonials h2,
                    .views-sticky h2,
                    .pricing-cta h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
