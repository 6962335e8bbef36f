//! Hero banner section

use leptos::prelude::*;

use super::FallbackImage;
use crate::fallback::FallbackPolicy;
use crate::motion::{HERO_CTA_DELAY, HERO_SUBTITLE_DELAY, delay_style};

/// Banner image; hidden rather than replaced when it fails to load.
pub const HERO_IMAGE: &str =
    "https://placehold.co/1920x1080?text=Striking+fashion+and+cutting-edge+electronics+landing+banner";

/// Static page header: banner image, headline and call to action.
#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <section class="hero">
            <FallbackImage
                class_name="hero-image"
                src=HERO_IMAGE
                alt="Striking landing banner showcasing modern clothing and innovative electronics in an urban setting"
                policy=FallbackPolicy::Hide
            />
            <div class="hero-overlay"></div>

            <div class="hero-content fade-in">
                <h1 class="hero-title slide-up">"Discover the Ultimate Style"</h1>
                <p class="hero-subtitle slide-up" style=delay_style(HERO_SUBTITLE_DELAY)>
                    "Explore latest trends in clothing and innovative electronics"
                </p>
                <button type="button" class="hero-cta slide-up" style=delay_style(HERO_CTA_DELAY)>
                    "Shop Now"
                </button>
            </div>

            // Scroll indicator
            <div class="scroll-indicator bounce">
                <div class="scroll-mouse">
                    <div class="scroll-wheel pulse"></div>
                </div>
            </div>
        </section>
    }
}
