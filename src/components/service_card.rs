use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Service;
use crate::navigation::{scroll_to, Section};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let learn_more = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to(Section::Contact);
    });

    html! {
        <div class="premium-card service-card">
            <div class="service-icon">
                <span class={service.icon.class()}>{ service.icon.glyph() }</span>
            </div>
            <div>
                <h3 class="service-title">{ service.title }</h3>
                <p class="service-description">{ service.description }</p>
            </div>
            <div class="service-footer">
                <div>
                    <span class="service-price">{ service.price }</span>
                    <span class="service-period">{ service.period }</span>
                </div>
                <button class="learn-more-button" onclick={learn_more}>
                    {"En savoir plus"}
                    <span class="arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}
