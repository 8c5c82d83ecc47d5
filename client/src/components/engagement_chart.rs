//! Weekly engagement bar chart for the analytics tab.

use leptos::prelude::*;

use crate::state::overview::EngagementPoint;
use crate::util::chart_math::{percent_bar_px, relative_bar_px};

#[component]
pub fn EngagementChart(points: &'static [EngagementPoint]) -> impl IntoView {
    let max_assignments = points.iter().map(|p| p.assignments).max().unwrap_or(0);
    view! {
        <div class="chart">
            {points
                .iter()
                .map(|point| {
                    let engagement = format!("{}px", percent_bar_px(f64::from(point.engagement)));
                    let assignments =
                        format!("{}px", relative_bar_px(f64::from(point.assignments), f64::from(max_assignments)));
                    view! {
                        <div class="chart__column">
                            <div class="chart__bars">
                                <div
                                    class="chart__bar chart__bar--engagement"
                                    style:height=engagement
                                    title=format!("{}% engagement", point.engagement)
                                ></div>
                                <div
                                    class="chart__bar chart__bar--assignments"
                                    style:height=assignments
                                    title=format!("{} assignments", point.assignments)
                                ></div>
                            </div>
                            <div class="chart__label">{point.day}</div>
                            <div class="chart__value">{point.engagement} "%"</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="chart__legend">
            <span class="chart__key chart__key--engagement">"Engagement"</span>
            <span class="chart__key chart__key--assignments">"Assignments submitted"</span>
        </div>
    }
}
