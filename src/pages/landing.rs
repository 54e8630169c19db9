use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::count_up::CountUpAnimation;
use crate::components::phone_mockup::PhoneMockup;
use crate::components::service_card::ServiceCard;
use crate::config;
use crate::content::{
    average_rating, stars, Feature, Icon, APP_FEATURES, APP_SCREENSHOT, COMMITMENTS, SERVICES,
    STATS, TESTIMONIALS,
};
use crate::navigation::{scroll_to, Section};

fn scroll_button(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(section);
    })
}

fn star_row(rating: u8) -> Html {
    let (filled, empty) = stars(rating);
    html! {
        <div class="stars" aria-label={format!("{} sur 5", filled)}>
            { for (0..filled).map(|_| html! { <span class="star filled">{"★"}</span> }) }
            { for (0..empty).map(|_| html! { <span class="star">{"☆"}</span> }) }
        </div>
    }
}

fn feature_row(feature: &Feature) -> Html {
    html! {
        <div class="feature-row">
            <div class="feature-icon">
                <span class={feature.icon.class()}>{ feature.icon.glyph() }</span>
            </div>
            <div>
                <h3>{ feature.title }</h3>
                <p>{ feature.text }</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let year = chrono::Local::now().year();
    let badge = average_rating(TESTIMONIALS);

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page section {
                        padding: 6rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        max-width: 40rem;
                        margin: 0 auto;
                        color: var(--secondary);
                        font-size: 1.1rem;
                    }
                    .gradient-text {
                        background: linear-gradient(135deg, var(--primary), var(--primary-light));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero {
                        min-height: 90vh;
                        background: linear-gradient(180deg, var(--secondary-light), #ffffff);
                    }
                    .hero-grid, .app-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        padding-top: 4rem;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-pitch {
                        font-size: 1.25rem;
                        color: var(--primary-light);
                        margin-bottom: 2.5rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                    }
                    .premium-button, .secondary-button, .learn-more-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.6rem;
                        border-radius: 999px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .premium-button {
                        border: none;
                        color: #ffffff;
                        background: linear-gradient(135deg, var(--primary), var(--primary-light));
                    }
                    .secondary-button, .learn-more-button {
                        border: 1px solid var(--secondary);
                        color: var(--primary);
                        background: #ffffff;
                    }
                    .premium-button:hover, .secondary-button:hover, .learn-more-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 10px 20px rgba(8, 31, 92, 0.15);
                    }
                    .premium-card {
                        background: #ffffff;
                        border-radius: 24px;
                        padding: 2.5rem;
                        box-shadow: 0 20px 40px rgba(8, 31, 92, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .premium-card:hover {
                        transform: translateY(-8px);
                    }
                    .stats-grid, .services-grid, .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .commitment-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .stat {
                        text-align: center;
                    }
                    .stat .icon {
                        font-size: 2.5rem;
                        display: block;
                        margin-bottom: 1.5rem;
                    }
                    .count-up {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .stat p {
                        color: var(--secondary);
                        font-size: 1.1rem;
                    }
                    .tinted {
                        background: var(--surface);
                    }
                    .service-icon, .feature-icon {
                        display: inline-block;
                        padding: 1rem;
                        border-radius: 16px;
                        background: linear-gradient(135deg, var(--surface), var(--secondary-light));
                        font-size: 1.75rem;
                    }
                    .service-description {
                        color: var(--secondary);
                        line-height: 1.6;
                    }
                    .service-price {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-right: 0.4rem;
                    }
                    .service-period {
                        color: var(--secondary);
                    }
                    .service-footer {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .feature-row {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        margin-bottom: 1.5rem;
                    }
                    .feature-row h3 {
                        margin: 0 0 0.4rem 0;
                    }
                    .feature-row p {
                        margin: 0;
                        color: var(--secondary);
                    }
                    .app-visual {
                        position: relative;
                    }
                    .app-visual img {
                        width: 100%;
                        aspect-ratio: 1 / 1;
                        object-fit: cover;
                        border-radius: 24px;
                    }
                    .rating-card {
                        position: absolute;
                        bottom: -2rem;
                        left: -2rem;
                        max-width: 20rem;
                        padding: 1.5rem;
                    }
                    .star {
                        color: var(--secondary-light);
                    }
                    .star.filled {
                        color: #FACC15;
                    }
                    .review-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin: 0 auto 3rem auto;
                        padding: 0.75rem 1.5rem;
                        border-radius: 999px;
                        border: 1px solid var(--secondary-light);
                        font-weight: 600;
                    }
                    .testimonial blockquote {
                        margin: 1rem 0;
                        font-style: italic;
                        line-height: 1.6;
                    }
                    .testimonial cite {
                        color: var(--secondary);
                        font-style: normal;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.4fr;
                        gap: 3rem;
                    }
                    .contact-form .form-row {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1.25rem;
                    }
                    .contact-form label {
                        font-weight: 600;
                        margin-bottom: 0.4rem;
                    }
                    .contact-form input, .contact-form select, .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border-radius: 12px;
                        border: 1px solid var(--secondary-light);
                        font: inherit;
                    }
                    .form-error {
                        color: #B91C1C;
                        margin-bottom: 1rem;
                    }
                    .form-success {
                        color: #15803D;
                        margin-bottom: 1rem;
                    }
                    .site-footer {
                        background: var(--primary);
                        color: #ffffff;
                        text-align: center;
                        padding: 3rem 1.5rem;
                    }
                    .footer-links a {
                        color: var(--secondary-light);
                        margin: 0 0.75rem;
                        text-decoration: none;
                    }
                    .footer-divider {
                        height: 1px;
                        width: 6rem;
                        margin: 1.5rem auto;
                        background: linear-gradient(90deg, transparent, var(--primary-light), transparent);
                    }
                    .footer-copy {
                        color: var(--secondary);
                        font-size: 0.875rem;
                    }
                    @media (max-width: 900px) {
                        .hero-grid, .app-grid, .contact-grid,
                        .stats-grid, .services-grid, .testimonials-grid, .commitment-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-visual {
                            display: none;
                        }
                        .hero h1 {
                            font-size: 2.75rem;
                        }
                    }
                "#}
            </style>

            // Hero
            <section id={Section::Home.anchor()} class="hero">
                <div class="section-inner hero-grid">
                    <div>
                        <h1>
                            <span class="gradient-text">{"Excellence"}</span>
                            <br />
                            {"en Paysagisme"}
                        </h1>
                        <p class="hero-pitch">
                            {"Une expertise unique dans la création et l'entretien de jardins d'exception. \
                              Nous donnons vie à vos rêves d'espaces extérieurs avec raffinement et élégance."}
                        </p>
                        <div class="hero-actions">
                            <button class="premium-button" onclick={scroll_button(Section::Services)}>
                                {"Découvrir nos services"}
                                <span class="arrow">{"›"}</span>
                            </button>
                            <button class="secondary-button" onclick={scroll_button(Section::App)}>
                                <span>{"📱"}</span>
                                {"Télécharger l'App"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <PhoneMockup />
                    </div>
                </div>
            </section>

            // Key figures
            <section id={Section::Stats.anchor()}>
                <div class="section-inner stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <span class={stat.icon.class()}>{ stat.icon.glyph() }</span>
                            <CountUpAnimation end={stat.value} />
                            <p>{ stat.label }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id={Section::Services.anchor()} class="tinted">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Services Premium"}</h2>
                        <p>
                            {"Des prestations d'excellence réalisées par nos apprentis sous la supervision \
                              constante de professionnels expérimentés."}
                        </p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <ServiceCard service={*service} />
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::App.anchor()}>
                <div class="section-inner app-grid">
                    <div>
                        <h2>{"Suivi en Temps Réel"}</h2>
                        <p class="hero-pitch">
                            {"Notre application mobile vous permet de suivre l'avancement de votre projet \
                              en temps réel. Recevez des mises à jour quotidiennes, des photos et validez \
                              chaque étape directement depuis votre smartphone."}
                        </p>
                        { for APP_FEATURES.iter().map(feature_row) }
                    </div>
                    <div class="app-visual">
                        <img src={APP_SCREENSHOT} alt="Application mobile EMFR" />
                        <div class="premium-card rating-card">
                            <h4>{"Note Moyenne"}</h4>
                            { star_row(5) }
                            <p>{ TESTIMONIALS[0].quote }</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id={Section::Testimonials.anchor()} class="tinted">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Ils nous font confiance"}</h2>
                        {
                            match badge {
                                Some(average) => html! {
                                    <div class="review-badge">
                                        <span>{"Avis clients"}</span>
                                        <strong>{ format!("{:.1}/5", average) }</strong>
                                        <span>{ format!("({} avis)", TESTIMONIALS.len()) }</span>
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                    </div>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|testimonial| html! {
                            <figure class="premium-card testimonial">
                                { star_row(testimonial.rating) }
                                <blockquote>{ testimonial.quote }</blockquote>
                                <cite>{ format!("{}, {}", testimonial.author, testimonial.place) }</cite>
                            </figure>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Commitment.anchor()}>
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Notre Engagement"}</h2>
                        <p>{"Une formation d'excellence certifiée par l'État, garantissant qualité et professionnalisme"}</p>
                    </div>
                    <div class="commitment-grid">
                        { for COMMITMENTS.iter().map(|commitment| html! {
                            <div class="premium-card">
                                { feature_row(commitment) }
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Contact.anchor()} class="tinted">
                <div class="section-inner contact-grid">
                    <div>
                        <h2>{"Parlons de votre projet"}</h2>
                        <p class="hero-pitch">
                            {"Création, entretien ou formation : décrivez-nous votre besoin, \
                              un responsable pédagogique vous recontacte."}
                        </p>
                        <p>{ format!("{} · {}", config::ORGANIZATION, config::CONTACT_ADDRESS) }</p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <p>
                    <span class={Icon::Heart.class()}>{ Icon::Heart.glyph() }</span>
                    { format!(" Initiative menée par la {} et {}", config::ORGANIZATION, config::PROJECT_LEAD) }
                </p>
                <nav class="footer-links">
                    { for Section::ALL.iter().map(|section| html! {
                        <a href={section.href()} onclick={scroll_button(*section)}>{ section.label() }</a>
                    }) }
                </nav>
                <div class="footer-divider"></div>
                <p class="footer-copy">
                    { format!("© {} {} - Tous droits réservés", year, config::ORGANIZATION) }
                </p>
            </footer>
        </div>
    }
}
