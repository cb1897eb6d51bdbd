//! Public landing page.
//!
//! Header with section links and auth actions, hero, features, pricing,
//! contact form and footer. Signed-in visitors are redirected to the
//! dashboard by the router before this renders.

mod contact;
mod content;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::auth_modal::AuthMode;
use crate::components::icons as ic;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::utils::dom;

use contact::ContactSection;
use content::{FEATURES, HIGHLIGHTS, PLANS};

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class=css::page>
            <Header />
            <Hero />
            <Features />
            <Pricing />
            <ContactSection />
            <Footer />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let user_email = Signal::derive(move || {
        ctx.auth
            .with(|a| a.user().map(|u| u.email.clone()))
    });

    view! {
        <header class=css::header>
            <nav class=css::nav>
                <div class=css::brand>
                    <span class=css::brandIcon><Icon icon=ic::CLOUD /></span>
                    <span class=css::brandName>{APP_NAME}</span>
                </div>

                <div class=css::links>
                    <button class=css::link on:click=|_| dom::scroll_to_id("features")>
                        "Features"
                    </button>
                    <button class=css::link on:click=|_| dom::scroll_to_id("pricing")>
                        "Pricing"
                    </button>
                    <button class=css::link on:click=|_| dom::scroll_to_id("contact")>
                        "Contact"
                    </button>
                </div>

                <div class=css::actions>
                    <ThemeToggle />
                    {move || match user_email.get() {
                        Some(email) => view! {
                            <span class=css::user>
                                <Icon icon=ic::USER />
                                {email}
                            </span>
                            <button class=css::signOut on:click=move |_| ctx.logout()>
                                <Icon icon=ic::LOGOUT />
                                "Sign Out"
                            </button>
                        }
                        .into_any(),
                        None => view! {
                            <button class=css::ghost on:click=move |_| ctx.open_auth(AuthMode::SignIn)>
                                "Sign In"
                            </button>
                            <button class=css::primary on:click=move |_| ctx.open_auth(AuthMode::SignUp)>
                                "Sign Up"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section class=css::hero>
            <h1 class=css::heroTitle>
                "Transfer Data as" <br /> "Naturally as Water Flows"
            </h1>
            <p class=css::heroText>
                "Seamlessly move files between cloud platforms with enterprise-grade security, \
                 real-time progress tracking, and cost transparency."
            </p>
            <div class=css::heroActions>
                <button class=css::heroPrimary on:click=move |_| ctx.open_auth(AuthMode::SignUp)>
                    "Start Free Trial"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
                <button class=css::heroSecondary on:click=|_| dom::scroll_to_id("features")>
                    "Learn More"
                </button>
            </div>
            <p class=css::heroNote>
                "No credit card required • 14-day free trial • Join 10,000+ companies"
            </p>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class=css::section>
            <div class=css::sectionHeading>
                <h2 class=css::sectionTitle>"Powerful Features"</h2>
                <p class=css::sectionText>
                    "Everything you need to move data between cloud platforms securely and efficiently"
                </p>
            </div>

            <div class=css::featureGrid>
                {FEATURES.iter().map(|feature| view! {
                    <article class=css::featureCard>
                        <span class=css::featureIcon><Icon icon=feature.icon /></span>
                        <h3 class=css::cardTitle>{feature.title}</h3>
                        <p class=css::cardText>{feature.description}</p>
                        <ul class=css::points>
                            {feature.points.iter().map(|point| view! {
                                <li class=css::point>
                                    <span class=css::check><Icon icon=ic::COMPLETED /></span>
                                    {*point}
                                </li>
                            }).collect_view()}
                        </ul>
                    </article>
                }).collect_view()}
            </div>

            <div class=css::highlightGrid>
                {HIGHLIGHTS.iter().map(|item| view! {
                    <div class=css::highlight>
                        <span class=css::highlightIcon><Icon icon=item.icon /></span>
                        <div>
                            <h4 class=css::highlightTitle>{item.title}</h4>
                            <p class=css::cardText>{item.description}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <section id="pricing" class=css::section>
            <div class=css::sectionHeading>
                <h2 class=css::sectionTitle>"Simple Pricing"</h2>
                <p class=css::sectionText>
                    "Choose the perfect plan for your needs. Start free, scale as you grow."
                </p>
                <span class=css::trialBadge>"14-day free trial • No credit card required"</span>
            </div>

            <div class=css::planGrid>
                {PLANS.iter().map(|plan| {
                    let class = if plan.popular {
                        format!("{} {}", css::planCard, css::planPopular)
                    } else {
                        css::planCard.to_string()
                    };
                    let on_cta = move |_: MouseEvent| {
                        if plan.price == "Custom" {
                            dom::scroll_to_id("contact");
                        } else {
                            ctx.open_auth(AuthMode::SignUp);
                        }
                    };

                    view! {
                        <article class=class>
                            {plan.popular.then(|| view! {
                                <span class=css::popularBadge>"Most Popular"</span>
                            })}
                            <span class=css::featureIcon><Icon icon=plan.icon /></span>
                            <h3 class=css::cardTitle>{plan.name}</h3>
                            <div class=css::price>
                                <span class=css::priceValue>{plan.price}</span>
                                <span class=css::pricePeriod>{plan.period}</span>
                            </div>
                            <ul class=css::points>
                                {plan.points.iter().map(|point| view! {
                                    <li class=css::point>
                                        <span class=css::check><Icon icon=ic::COMPLETED /></span>
                                        {*point}
                                    </li>
                                }).collect_view()}
                            </ul>
                            <button class=css::planButton on:click=on_cta>{plan.cta()}</button>
                        </article>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class=css::footer>
            <div class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::CLOUD /></span>
                <span class=css::brandName>{APP_NAME}</span>
            </div>
            <p class=css::footerText>{APP_TAGLINE}</p>
            <p class=css::footerText>"© 2024 " {APP_NAME} ". All rights reserved."</p>
        </footer>
    }
}
