use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    index: usize,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    // Accordion: at most one item open, opening one closes the rest.
    let open_index = use_state_eq(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |index: usize| {
            if *open_index == Some(index) {
                open_index.set(None);
            } else {
                open_index.set(Some(index));
            }
        })
    };

    let item = |index: usize| (*open_index == Some(index), on_toggle.clone());

    let (open_0, toggle_0) = item(0);
    let (open_1, toggle_1) = item(1);
    let (open_2, toggle_2) = item(2);
    let (open_3, toggle_3) = item(3);
    let (open_4, toggle_4) = item(4);

    html! {
        <section class="faq-section" id="faq">
            <h2 class="scroll-reveal">{"Frequently Asked Questions"}</h2>

            <FaqItem question="What exactly does Awesome Copy do?" index={0} open={open_0} on_toggle={toggle_0}>
                <p>
                    {"Awesome Copy drafts, rewrites and polishes marketing copy for you. Paste a rough outline or a competitor page and it produces headlines, feature blurbs and calls to action in your brand voice."}
                </p>
            </FaqItem>

            <FaqItem question="Which of the three views should I write in?" index={1} open={open_1} on_toggle={toggle_1}>
                <p>
                    {"Card view lays every variant out side by side for comparing drafts. Normal view is the everyday editor. Minimal view strips the chrome away when you just need to read the copy the way a visitor would. Switch any time, nothing is lost."}
                </p>
            </FaqItem>

            <FaqItem question="Does it work on my phone and tablet?" index={2} open={open_2} on_toggle={toggle_2}>
                <p>
                    {"Yes. The full editor runs on iPhone and iPad with the same account, and everything syncs the moment you're back at your desk."}
                </p>
            </FaqItem>

            <FaqItem question="Can I try it before paying?" index={3} open={open_3} on_toggle={toggle_3}>
                <p>
                    {"The starter plan is free forever: three projects, unlimited drafts. No card required. Upgrade only when a whole team needs to work in the same workspace."}
                </p>
            </FaqItem>

            <FaqItem question="Who owns the copy it writes?" index={4} open={open_4} on_toggle={toggle_4}>
                <p>
                    {"You do, entirely. Drafts live in your workspace, exports are plain text, and nothing you write trains anything shared."}
                </p>
            </FaqItem>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .faq-section h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                    text-align: center;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e8e8ef;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: #b9b9d0;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    color: #1a1a2e;
                    font-size: 1.15rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #5b5bd6;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #55556d;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 3rem 1rem;
                    }

                    .faq-section h2 {
                        font-size: 2rem;
                    }

                    .faq-question {
                        font-size: 1.05rem;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
