//! Circular SVG progress indicator.

use leptos::prelude::*;

use crate::util::chart_math::ring_geometry;

const STROKE: f64 = 8.0;

#[component]
pub fn ProgressRing(progress: f64, #[prop(default = 80.0)] size: f64) -> impl IntoView {
    let ring = ring_geometry(progress, size, STROKE);
    let center = ring.center.to_string();
    let radius = ring.radius.to_string();
    view! {
        <svg class="progress-ring" width=size.to_string() height=size.to_string() viewBox=format!("0 0 {size} {size}")>
            <circle
                class="progress-ring__track"
                cx=center.clone()
                cy=center.clone()
                r=radius.clone()
                fill="none"
                stroke-width=STROKE.to_string()
            />
            <circle
                class="progress-ring__value"
                cx=center.clone()
                cy=center.clone()
                r=radius.clone()
                fill="none"
                stroke-width=STROKE.to_string()
                stroke-linecap="round"
                stroke-dasharray=ring.circumference.to_string()
                stroke-dashoffset=ring.dash_offset.to_string()
                transform=format!("rotate(-90 {0} {0})", ring.center)
            />
        </svg>
    }
}
