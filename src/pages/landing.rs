use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::components::analytics_charts::AnalyticsCharts;
use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqSection;
use crate::components::modal::Modal;
use crate::components::stat_counter::{CounterTrigger, StatCounter};
use crate::config;
use crate::pages::termsprivacy::{PrivacyPolicy, TermsOfService};
use crate::session;

fn scroll_to_section(id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn cta_href(logged_in: bool) -> String {
    if logged_in {
        config::get_app_url().to_string()
    } else {
        format!("{}/signup", config::get_app_url())
    }
}

fn cta_label(logged_in: bool) -> &'static str {
    if logged_in {
        "Go to Dashboard"
    } else {
        "Get Started"
    }
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "💳",
        title: "Digital Loyalty Cards",
        description: "Create beautiful, branded digital loyalty cards that customers love. No \
                      more paper cards to lose or forget.",
    },
    Feature {
        icon: "📱",
        title: "Apple & Google Wallet Integration",
        description: "Seamlessly integrate with Apple Wallet and Google Wallet. Your cards are \
                      always accessible on your customers' devices.",
    },
    Feature {
        icon: "🔲",
        title: "QR Code Scanning",
        description: "Fast and easy stamp tracking with QR codes. Customers simply scan to earn \
                      rewards at your store.",
    },
    Feature {
        icon: "👥",
        title: "Customer Management",
        description: "Track and manage all your customers in one place. See who's engaged and \
                      who needs a nudge.",
    },
    Feature {
        icon: "📊",
        title: "Analytics Dashboard",
        description: "Gain insights into customer behavior with detailed analytics. Make \
                      data-driven decisions to grow your business.",
    },
    Feature {
        icon: "🎨",
        title: "Custom Branding",
        description: "Upload your own logo, brand name, and custom stamp icons with the Growth \
                      Plan. Make it uniquely yours.",
    },
];

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Design Your Card",
        description: "Create a beautiful digital loyalty card with our easy-to-use builder. \
                      Customize colors, branding, and set your reward structure.",
    },
    Step {
        number: "02",
        title: "Display Your QR Code",
        description: "Print your unique QR code and display it at your shop, or show it \
                      digitally from the platform on any device.",
    },
    Step {
        number: "03",
        title: "Customers Add to Wallet",
        description: "Customers scan the QR code and instantly add your loyalty card to their \
                      Apple Wallet or Google Wallet with one tap.",
    },
    Step {
        number: "04",
        title: "Scan & Reward",
        description: "When customers return, scan their digital card and reward them with \
                      points or stamps. Watch your business grow!",
    },
];

struct PlanCell {
    available: bool,
    text: &'static str,
}

struct PricingRow {
    feature: &'static str,
    starter: PlanCell,
    growth: PlanCell,
}

const PRICING_ROWS: &[PricingRow] = &[
    PricingRow {
        feature: "Loyalty Card Designs",
        starter: PlanCell { available: true, text: "1 standard template" },
        growth: PlanCell { available: true, text: "1 standard template" },
    },
    PricingRow {
        feature: "Apple & Google Wallet Integration",
        starter: PlanCell { available: true, text: "Included" },
        growth: PlanCell { available: true, text: "Included" },
    },
    PricingRow {
        feature: "Customer Stamp Tracking",
        starter: PlanCell { available: true, text: "Included" },
        growth: PlanCell { available: true, text: "Included" },
    },
    PricingRow {
        feature: "QR Code for In-Store Display",
        starter: PlanCell { available: true, text: "Included" },
        growth: PlanCell { available: true, text: "Included" },
    },
    PricingRow {
        feature: "Customer Capacity",
        starter: PlanCell { available: true, text: "Up to 100 customers" },
        growth: PlanCell { available: true, text: "Unlimited customers" },
    },
    PricingRow {
        feature: "Dashboard & Stats",
        starter: PlanCell { available: true, text: "Basic stats & Transactions Analytics" },
        growth: PlanCell { available: true, text: "Basic stats & Transactions Analytics" },
    },
    PricingRow {
        feature: "Custom Branding",
        starter: PlanCell { available: false, text: "TapBak branding only" },
        growth: PlanCell { available: true, text: "Custom shop branding" },
    },
    PricingRow {
        feature: "Stamp Icon Customization",
        starter: PlanCell { available: false, text: "Standard icons only" },
        growth: PlanCell { available: true, text: "Custom stamp icons" },
    },
    PricingRow {
        feature: "7-Day Free Trial",
        starter: PlanCell { available: true, text: "Yes" },
        growth: PlanCell { available: false, text: "No" },
    },
];

#[derive(Properties, PartialEq)]
struct NavProps {
    logged_in: bool,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Scrolling from a nav link also closes the mobile menu.
    let scroll_link = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <span class="nav-logo">
                    <span class="nav-logo-mark">{"T"}</span>
                    {"TapBak"}
                </span>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <button class="nav-link" onclick={scroll_link("features")}>{"Features"}</button>
                    <button class="nav-link" onclick={scroll_link("pricing")}>{"Pricing"}</button>
                    <button class="nav-link" onclick={scroll_link("contact")}>{"Contact"}</button>
                    <button class="nav-link" onclick={scroll_link("faq")}>{"FAQ"}</button>
                    {
                        if props.logged_in {
                            html! {
                                <a href={config::get_app_url().to_string()} class="nav-cta">
                                    {"Go to Dashboard"}
                                </a>
                            }
                        } else {
                            html! {
                                <>
                                    <a href={format!("{}/login", config::get_app_url())} class="nav-login">
                                        {"Login"}
                                    </a>
                                    <a href={format!("{}/signup", config::get_app_url())} class="nav-cta">
                                        {"Get Started"}
                                    </a>
                                </>
                            }
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    logged_in: bool,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero-section">
            <div class="hero-orbs">
                <div class="orb orb-blue"></div>
                <div class="orb orb-violet"></div>
            </div>
            <div class="hero-content">
                <h1>
                    {"Digital Loyalty Cards for "}
                    <span class="gradient-text">{"Modern Businesses"}</span>
                </h1>
                <p>
                    {"Transform your customer loyalty program with digital cards that live in \
                     Apple & Google Wallet. Increase repeat visits and build lasting \
                     relationships."}
                </p>
                <a href={cta_href(props.logged_in)} class="hero-cta">
                    { cta_label(props.logged_in) }
                </a>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="section-header">
                <h2>{"Everything You Need to "}<span class="gradient-text">{"Grow Your Business"}</span></h2>
                <p>
                    {"Powerful features designed to help you create, manage, and optimize your \
                     customer loyalty program."}
                </p>
            </div>
            <div class="features-grid">
                {
                    for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{ feature.icon }</div>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(StepsSection)]
fn steps_section() -> Html {
    html! {
        <section class="steps-section">
            <div class="section-header">
                <h2>{"Get Started in "}<span class="gradient-text">{"4 Simple Steps"}</span></h2>
                <p>
                    {"From design to rewarding customers - launch your digital loyalty program \
                     in minutes."}
                </p>
            </div>
            <div class="steps-list">
                {
                    for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="step-row">
                            <div class="step-marker">
                                <span class="step-number">{ step.number }</span>
                                { if i < STEPS.len() - 1 { html! { <div class="step-connector"></div> } } else { html! {} } }
                            </div>
                            <div class="step-card">
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                            </div>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(AnalyticsSection)]
fn analytics_section() -> Html {
    let stats_ref = use_node_ref();
    let counters_started = use_state(|| false);

    // Observe the stats grid; the first time it is at least 30% visible the
    // counters start and the observer lets go of the section for good.
    {
        let stats_ref = stats_ref.clone();
        let counters_started = counters_started.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer_slot: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(target) = stats_ref.cast::<Element>() {
                    let trigger = Rc::new(RefCell::new(CounterTrigger::new()));
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if entry.is_intersecting() && trigger.borrow_mut().fire() {
                                    counters_started.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(0.3));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&target);
                        observer_slot = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observer_slot {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section class="analytics-section">
            <div class="section-header">
                <h2>{"Powerful "}<span class="gradient-text">{"Analytics & Insights"}</span></h2>
                <p>
                    {"Track every customer interaction, transaction, and earning. Make \
                     data-driven decisions with real-time insights."}
                </p>
            </div>

            <div ref={stats_ref} id="analytics-stats" class="stats-grid">
                <div class="stat-card">
                    <div class="stat-icon sky">{"👥"}</div>
                    <p class="stat-label">{"Total Customers"}</p>
                    <p class="stat-value"><StatCounter target={342} start={*counters_started} /></p>
                    <p class="stat-trend sky">{"↗ +24% from last month"}</p>
                </div>
                <div class="stat-card">
                    <div class="stat-icon violet">{"⚡"}</div>
                    <p class="stat-label">{"Transactions"}</p>
                    <p class="stat-value"><StatCounter target={1234} start={*counters_started} /></p>
                    <p class="stat-trend violet">{"↗ +31% from last month"}</p>
                </div>
                <div class="stat-card">
                    <div class="stat-icon sky">{"💰"}</div>
                    <p class="stat-label">{"Monthly Earnings"}</p>
                    <p class="stat-value">{"$"}<StatCounter target={9870} start={*counters_started} /></p>
                    <p class="stat-trend sky">{"↗ +18% from last month"}</p>
                </div>
            </div>

            <AnalyticsCharts />

            <div class="mini-features">
                <div class="mini-feature">
                    <h4>{"Customer Tracking"}</h4>
                    <p>{"Track every customer visit and interaction"}</p>
                </div>
                <div class="mini-feature">
                    <h4>{"Transaction History"}</h4>
                    <p>{"Complete history of all transactions"}</p>
                </div>
                <div class="mini-feature">
                    <h4>{"Real-time Insights"}</h4>
                    <p>{"Get insights as they happen"}</p>
                </div>
                <div class="mini-feature">
                    <h4>{"Earnings Dashboard"}</h4>
                    <p>{"Monitor revenue and profitability"}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PricingSectionProps {
    logged_in: bool,
}

#[function_component(PricingSection)]
fn pricing_section(props: &PricingSectionProps) -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <div class="section-header">
                <h2>{"Choose Your "}<span class="gradient-text">{"Plan"}</span></h2>
                <p>{"Unlock powerful features to grow your business"}</p>
            </div>

            <div class="pricing-grid">
                <div class="pricing-card">
                    <div class="plan-name">
                        <span class="plan-icon">{"★"}</span>
                        <h3>{"Starter"}</h3>
                    </div>
                    <p class="plan-tagline">{"Starter Plan for Small Businesses"}</p>
                    <div class="plan-price">
                        <span class="amount">{"£50"}</span>
                        <span class="period">{"/month"}</span>
                    </div>
                    <p class="plan-note sky">{"7-day free trial included"}</p>
                    <p class="plan-features-title">{"Key Features"}</p>
                    <ul class="plan-features">
                        <li class="included">{"Up to 100 customers"}</li>
                        <li class="included">{"1 standard loyalty card template"}</li>
                        <li class="included">{"7-day free trial"}</li>
                        <li class="excluded">{"TapBak branding only"}</li>
                        <li class="excluded">{"Standard icons only"}</li>
                    </ul>
                    <a href={cta_href(props.logged_in)} class="plan-cta outline">
                        { cta_label(props.logged_in) }
                    </a>
                </div>

                <div class="pricing-card popular">
                    <span class="popular-badge">{"Most Popular"}</span>
                    <div class="plan-name">
                        <span class="plan-icon">{"♛"}</span>
                        <h3>{"Growth"}</h3>
                    </div>
                    <p class="plan-tagline">{"Growth Enterprise Plan"}</p>
                    <div class="plan-price">
                        <span class="amount">{"£100"}</span>
                        <span class="period">{"/month"}</span>
                    </div>
                    <p class="plan-note">{"No free trial • Full access from day one"}</p>
                    <p class="plan-features-title">{"Key Features"}</p>
                    <ul class="plan-features">
                        <li class="included">{"Unlimited customers"}</li>
                        <li class="included">{"Custom branding & icons"}</li>
                        <li class="included">{"Advanced customization"}</li>
                        <li class="included">{"All features from Starter Plan"}</li>
                    </ul>
                    <a href={cta_href(props.logged_in)} class="plan-cta filled">
                        { cta_label(props.logged_in) }
                    </a>
                </div>
            </div>

            <div class="comparison-panel">
                <h3>{"Plan Features Comparison"}</h3>
                <div class="comparison-scroll">
                    <table class="comparison-table">
                        <thead>
                            <tr>
                                <th>{"Feature"}</th>
                                <th class="sky">{"★ Starter Plan"}</th>
                                <th class="violet">{"♛ Growth Plan"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for PRICING_ROWS.iter().map(|row| html! {
                                    <tr>
                                        <td class="feature-name">{ row.feature }</td>
                                        <td>
                                            <span class={if row.starter.available { "mark included" } else { "mark excluded" }}>
                                                { if row.starter.available { "✓" } else { "✕" } }
                                            </span>
                                            { row.starter.text }
                                        </td>
                                        <td>
                                            <span class={if row.growth.available { "mark included" } else { "mark excluded" }}>
                                                { if row.growth.available { "✓" } else { "✕" } }
                                            </span>
                                            { row.growth.text }
                                        </td>
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <div class="section-header">
                <h2>{"Get in "}<span class="gradient-text">{"Touch"}</span></h2>
                <p>
                    {"Have questions? We'd love to hear from you. Send us a message and we'll \
                     respond as soon as possible."}
                </p>
            </div>
            <ContactForm />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_show_terms: Callback<MouseEvent>,
    on_show_privacy: Callback<MouseEvent>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="nav-logo">
                        <span class="nav-logo-mark">{"T"}</span>
                        {"TapBak"}
                    </span>
                    <p>
                        {"The modern digital loyalty card platform for businesses that want to \
                         grow customer engagement and drive repeat sales."}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <p>{"410 Sonic House"}</p>
                    <p>{"Monier Road"}</p>
                    <p>{"London"}</p>
                    <p>{"E3 2NP"}</p>
                    <p class="footer-phone"><a href="tel:07471503999">{"07471 503999"}</a></p>
                </div>
                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <button class="footer-link" onclick={props.on_show_terms.clone()}>
                        {"Terms of Service"}
                    </button>
                    <button class="footer-link" onclick={props.on_show_privacy.clone()}>
                        {"Privacy Policy"}
                    </button>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 TapBak. All rights reserved."}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // One-shot cookie read at mount; not re-checked until reload.
    let logged_in = use_state(session::is_logged_in);
    let show_terms = use_state(|| false);
    let show_privacy = use_state(|| false);

    // Scroll to top only on initial mount
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

    let open_terms = {
        let show_terms = show_terms.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_terms.set(true);
        })
    };
    let close_terms = {
        let show_terms = show_terms.clone();
        Callback::from(move |_: MouseEvent| show_terms.set(false))
    };
    let open_privacy = {
        let show_privacy = show_privacy.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_privacy.set(true);
        })
    };
    let close_privacy = {
        let show_privacy = show_privacy.clone();
        Callback::from(move |_: MouseEvent| show_privacy.set(false))
    };

    html! {
        <div class="landing-page">
            <Nav logged_in={*logged_in} />
            <Hero logged_in={*logged_in} />
            <FeaturesSection />
            <StepsSection />
            <AnalyticsSection />
            <PricingSection logged_in={*logged_in} />
            <ContactSection />
            <FaqSection />
            <Footer on_show_terms={open_terms} on_show_privacy={open_privacy} />

            {
                if *show_terms {
                    html! {
                        <Modal title="Terms of Service" on_close={close_terms}>
                            <TermsOfService />
                        </Modal>
                    }
                } else {
                    html! {}
                }
            }
            {
                if *show_privacy {
                    html! {
                        <Modal title="Privacy Policy" on_close={close_privacy}>
                            <PrivacyPolicy />
                        </Modal>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0F0A1F;
                    color: #fff;
                    overflow-x: hidden;
                }

                .gradient-text {
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-header {
                    text-align: center;
                    max-width: 700px;
                    margin: 0 auto 4rem;
                }

                .section-header h2 {
                    font-size: 2.5rem;
                    margin: 0 0 1rem;
                }

                .section-header p {
                    color: #9CA3AF;
                    font-size: 1.1rem;
                    margin: 0;
                }

                /* Navigation */
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    border-bottom: 1px solid rgba(127, 32, 255, 0.2);
                    backdrop-filter: blur(16px);
                    background: rgba(15, 10, 31, 0.8);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }

                .nav-logo-mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.2rem;
                    height: 2.2rem;
                    border-radius: 10px;
                    background: linear-gradient(135deg, #2DB6FF, #9A3BFF);
                    font-weight: 800;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #D1D5DB;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                    padding: 0;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-login {
                    color: #D1D5DB;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-login:hover {
                    color: #fff;
                }

                .nav-cta {
                    padding: 0.6rem 1.4rem;
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    color: #fff;
                    font-weight: 600;
                    border-radius: 12px;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                    box-shadow: 0 8px 24px rgba(45, 182, 255, 0.2);
                }

                .nav-cta:hover {
                    transform: scale(1.05);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: all 0.3s ease;
                }

                /* Hero */
                .hero-section {
                    position: relative;
                    padding: 6rem 1.5rem 8rem;
                    overflow: visible;
                }

                .hero-orbs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .orb-blue {
                    top: 0;
                    left: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(45, 182, 255, 0.1);
                }

                .orb-violet {
                    bottom: 0;
                    right: 25%;
                    width: 30rem;
                    height: 30rem;
                    background: rgba(154, 59, 255, 0.1);
                }

                .hero-content {
                    position: relative;
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-content h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .hero-content p {
                    font-size: 1.2rem;
                    color: #9CA3AF;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border-radius: 12px;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                    box-shadow: 0 8px 24px rgba(45, 182, 255, 0.2);
                }

                .hero-cta:hover {
                    transform: scale(1.05);
                }

                /* Features */
                .features-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .feature-card {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: border-color 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(127, 32, 255, 0.4);
                }

                .feature-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                    background: rgba(127, 32, 255, 0.1);
                    border: 1px solid rgba(127, 32, 255, 0.2);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                }

                .feature-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.5rem;
                }

                .feature-card p {
                    color: #9CA3AF;
                    margin: 0;
                    line-height: 1.6;
                }

                /* Steps */
                .steps-section {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .step-row {
                    display: flex;
                    gap: 1.25rem;
                    align-items: flex-start;
                    margin-bottom: 3rem;
                }

                .step-marker {
                    position: relative;
                    flex-shrink: 0;
                }

                .step-number {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    border: 2px solid transparent;
                    background:
                        linear-gradient(#0F0A1F, #0F0A1F) padding-box,
                        linear-gradient(to right, #2DB6FF, #9A3BFF) border-box;
                    font-size: 1.4rem;
                    font-weight: 700;
                }

                .step-connector {
                    position: absolute;
                    left: 50%;
                    top: 4rem;
                    width: 2px;
                    height: 3rem;
                    background: linear-gradient(to bottom, rgba(127, 32, 255, 0.5), transparent);
                }

                .step-card {
                    flex: 1;
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .step-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                }

                .step-card p {
                    margin: 0;
                    color: #9CA3AF;
                    line-height: 1.6;
                }

                /* Analytics */
                .analytics-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .stat-card {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                    transition: border-color 0.3s ease;
                }

                .stat-card:hover {
                    border-color: rgba(127, 32, 255, 0.4);
                }

                .stat-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.3rem;
                    border-radius: 12px;
                    margin-bottom: 0.75rem;
                }

                .stat-icon.sky {
                    background: rgba(45, 182, 255, 0.1);
                    border: 1px solid rgba(45, 182, 255, 0.2);
                }

                .stat-icon.violet {
                    background: rgba(154, 59, 255, 0.1);
                    border: 1px solid rgba(154, 59, 255, 0.2);
                }

                .stat-label {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    margin: 0.25rem 0 0.75rem;
                }

                .stat-trend {
                    font-size: 0.9rem;
                    margin: 0;
                }

                .stat-trend.sky {
                    color: #2DB6FF;
                }

                .stat-trend.violet {
                    color: #9A3BFF;
                }

                .mini-features {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                    text-align: center;
                }

                .mini-feature h4 {
                    margin: 0 0 0.25rem;
                }

                .mini-feature p {
                    margin: 0;
                    color: #9CA3AF;
                    font-size: 0.9rem;
                }

                /* Pricing */
                .pricing-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 950px;
                    margin: 0 auto 4rem;
                }

                .pricing-card {
                    position: relative;
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }

                .pricing-card.popular {
                    border-color: #9A3BFF;
                }

                .popular-badge {
                    position: absolute;
                    top: -0.9rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    color: #fff;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                }

                .plan-name {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .plan-name h3 {
                    margin: 0;
                    font-size: 1.5rem;
                }

                .plan-icon {
                    color: #2DB6FF;
                    font-size: 1.25rem;
                }

                .pricing-card.popular .plan-icon {
                    color: #9A3BFF;
                }

                .plan-tagline {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0.25rem 0 1.5rem;
                }

                .plan-price .amount {
                    font-size: 3rem;
                    font-weight: 700;
                }

                .plan-price .period {
                    color: #9CA3AF;
                    margin-left: 0.25rem;
                }

                .plan-note {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0.5rem 0 1.5rem;
                }

                .plan-note.sky {
                    color: #2DB6FF;
                }

                .plan-features-title {
                    color: #9CA3AF;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }

                .plan-features {
                    list-style: none;
                    margin: 0 0 2rem;
                    padding: 0;
                    flex: 1;
                }

                .plan-features li {
                    padding: 0.4rem 0 0.4rem 1.75rem;
                    position: relative;
                    color: #D1D5DB;
                }

                .plan-features li.excluded {
                    color: #9CA3AF;
                }

                .plan-features li.included::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #2DB6FF;
                }

                .plan-features li.excluded::before {
                    content: '✕';
                    position: absolute;
                    left: 0;
                    color: #9A3BFF;
                }

                .plan-cta {
                    display: block;
                    text-align: center;
                    padding: 0.85rem 1.5rem;
                    border-radius: 12px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .plan-cta.outline {
                    border: 2px solid rgba(127, 32, 255, 0.4);
                    color: #2DB6FF;
                }

                .plan-cta.outline:hover {
                    background: rgba(127, 32, 255, 0.1);
                }

                .plan-cta.filled {
                    background: linear-gradient(to right, #2DB6FF, #9A3BFF);
                    color: #fff;
                    box-shadow: 0 8px 24px rgba(45, 182, 255, 0.2);
                }

                .plan-cta.filled:hover {
                    transform: scale(1.03);
                }

                .comparison-panel {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .comparison-panel h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.25rem;
                }

                .comparison-scroll {
                    overflow-x: auto;
                }

                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }

                .comparison-table th {
                    text-align: left;
                    padding: 1rem;
                    border-bottom: 1px solid rgba(127, 32, 255, 0.2);
                }

                .comparison-table th.sky {
                    color: #2DB6FF;
                    text-align: center;
                }

                .comparison-table th.violet {
                    color: #9A3BFF;
                    text-align: center;
                }

                .comparison-table td {
                    padding: 1rem;
                    border-bottom: 1px solid rgba(127, 32, 255, 0.1);
                    color: #D1D5DB;
                    font-size: 0.9rem;
                    text-align: center;
                }

                .comparison-table td.feature-name {
                    font-weight: 500;
                    color: #fff;
                    text-align: left;
                }

                .comparison-table tr:hover td {
                    background: rgba(127, 32, 255, 0.05);
                }

                .mark {
                    margin-right: 0.5rem;
                }

                .mark.included {
                    color: #2DB6FF;
                }

                .mark.excluded {
                    color: #9A3BFF;
                }

                /* Contact */
                .contact-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                /* Footer */
                .site-footer {
                    border-top: 1px solid rgba(127, 32, 255, 0.2);
                    padding: 3rem 1.5rem 2rem;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }

                .footer-brand p {
                    color: #9CA3AF;
                    max-width: 420px;
                    margin: 1rem 0 0;
                    line-height: 1.6;
                }

                .footer-column h4 {
                    margin: 0 0 1rem;
                }

                .footer-column p {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0 0 0.5rem;
                }

                .footer-phone {
                    margin-top: 1rem;
                }

                .footer-phone a {
                    color: #9CA3AF;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-phone a:hover {
                    color: #fff;
                }

                .footer-link {
                    display: block;
                    background: none;
                    border: none;
                    padding: 0;
                    margin-bottom: 0.5rem;
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(127, 32, 255, 0.2);
                    text-align: center;
                }

                .footer-bottom p {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .stats-grid {
                        grid-template-columns: 1fr;
                    }

                    .mini-features {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        text-align: left;
                        background: rgba(15, 10, 31, 0.97);
                        border-bottom: 1px solid rgba(127, 32, 255, 0.2);
                        padding: 1rem 1.5rem;
                        gap: 1rem;
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }

                    .nav-link {
                        text-align: left;
                        padding: 0.5rem 0;
                    }

                    .nav-cta,
                    .nav-login {
                        text-align: center;
                    }

                    .hero-content h1 {
                        font-size: 2.25rem;
                    }

                    .section-header h2 {
                        font-size: 1.9rem;
                    }

                    .features-grid,
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }

                    .mini-features {
                        grid-template-columns: 1fr;
                    }

                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{cta_href, cta_label};

    #[test]
    fn cta_switches_on_session_flag() {
        assert_eq!(cta_label(false), "Get Started");
        assert_eq!(cta_label(true), "Go to Dashboard");
        assert!(cta_href(false).ends_with("/signup"));
        assert!(!cta_href(true).ends_with("/signup"));
    }
}
