use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "What is TapBak?",
        answer: "TapBak is a digital loyalty card platform that helps businesses create and \
                 manage digital loyalty programs. Customers can add your loyalty cards to their \
                 Apple or Google Wallet, making it easy to track rewards and drive repeat \
                 business.",
    },
    FaqEntry {
        question: "How does the free trial work?",
        answer: "The Starter Plan includes a 7-day free trial with full access to all starter \
                 features. No credit card required to start. After the trial, the Starter Plan \
                 costs £50/month with up to 100 customers. You can upgrade to the Growth Plan \
                 (£100/month) anytime for unlimited customers and custom branding.",
    },
    FaqEntry {
        question: "Can I customize my loyalty cards?",
        answer: "Yes! With the Growth Plan, you can fully customize your loyalty cards with \
                 your brand colors, custom logos, stamp icons, and messaging. The Starter Plan \
                 includes one standard template with TapBak branding.",
    },
    FaqEntry {
        question: "Which devices are supported?",
        answer: "TapBak works with both Apple Wallet (iOS) and Google Wallet (Android). \
                 Customers can add your loyalty cards to their mobile wallets on any compatible \
                 smartphone.",
    },
    FaqEntry {
        question: "How do customers add cards to their wallet?",
        answer: "It's simple! Customers scan your unique QR code displayed at your store or \
                 shared digitally. The card is instantly added to their Apple or Google Wallet \
                 with one tap.",
    },
    FaqEntry {
        question: "What's the difference between Starter and Growth plans?",
        answer: "The Starter Plan (£50/month) is perfect for small businesses with up to 100 \
                 customers and includes TapBak branding with standard templates. The Growth \
                 Plan (£100/month) offers unlimited customers, custom branding (your logo and \
                 name), custom stamp icons, and advanced customization - ideal for growing \
                 businesses that need a professional, white-label solution.",
    },
];

/// Single-open-at-a-time semantics: clicking the open item closes it,
/// clicking any other item moves the open slot there.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    index: usize,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="faq-answer">
                            <p>{ props.answer }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |clicked: usize| {
            open_index.set(toggle(*open_index, clicked));
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="section-header">
                <h2>{"Frequently Asked "}<span class="gradient-text">{"Questions"}</span></h2>
                <p>{"Everything you need to know about TapBak"}</p>
            </div>
            <div class="faq-list">
                {
                    for FAQS.iter().enumerate().map(|(index, faq)| html! {
                        <FaqItem
                            question={faq.question}
                            answer={faq.answer}
                            {index}
                            open={*open_index == Some(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    })
                }
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(127, 32, 255, 0.4);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    transition: background 0.3s ease;
                }

                .faq-question:hover {
                    background: rgba(127, 32, 255, 0.05);
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #2DB6FF;
                    transition: transform 0.3s ease;
                    flex-shrink: 0;
                    margin-left: 1rem;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #9CA3AF;
                    line-height: 1.6;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .faq-section {
                        padding: 3rem 1rem;
                    }

                    .faq-question {
                        font-size: 1rem;
                        padding: 1rem;
                    }

                    .faq-answer {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;

    #[test]
    fn opening_from_closed() {
        assert_eq!(toggle(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(2), 2), None);
    }

    #[test]
    fn clicking_other_item_moves_the_open_slot() {
        assert_eq!(toggle(Some(2), 4), Some(4));
    }

    #[test]
    fn double_toggle_returns_to_fully_closed() {
        let open = toggle(None, 1);
        assert_eq!(toggle(open, 1), None);
    }
}
