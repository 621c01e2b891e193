//! Market trends: price line chart, type pie chart and headline figures

use immo_core::chart::{pie_slices, Frame, LineChart, PieSlice};
use immo_core::content::{Icon, Section};
use immo_core::format::format_price_per_m2;
use immo_core::models::{MarketStat, MarketTrendPoint, TypeDistribution};
use leptos::prelude::*;

use crate::components::{IconGlyph, RevealOnScroll};
use crate::state::use_site;

const PIE_CENTER: f64 = 110.0;
const PIE_RADIUS: f64 = 100.0;

#[component]
pub fn MarketTrends() -> impl IntoView {
    let site = use_site();
    let trends = site.data.market_trends.clone();
    let distribution = site.data.distribution.clone();
    let stats = site.data.market_stats.clone();

    view! {
        <section id=Section::Trends.id() class="section trends">
            <div class="container">
                <div class="trends-card">
                    <RevealOnScroll class="section-heading">
                        <h2>"Tendances du marché immobilier"</h2>
                        <p>
                            "Suivez l'évolution des prix et la répartition des types de biens dans votre secteur"
                        </p>
                    </RevealOnScroll>
                    <div class="grid two">
                        <RevealOnScroll class="chart-panel">
                            <h3>
                                <IconGlyph icon=Icon::ChartLine />
                                " Évolution des prix au m²"
                            </h3>
                            <PriceChart data=trends />
                        </RevealOnScroll>
                        <RevealOnScroll index=1 class="chart-panel">
                            <h3>
                                <IconGlyph icon=Icon::ChartPie />
                                " Répartition des types de biens"
                            </h3>
                            <DistributionChart distribution=distribution />
                        </RevealOnScroll>
                    </div>
                    <div class="grid four stats">
                        {stats
                            .into_iter()
                            .enumerate()
                            .map(|(index, stat)| view! {
                                <RevealOnScroll index=index>
                                    <StatCard stat=stat />
                                </RevealOnScroll>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PriceChart(data: Vec<MarketTrendPoint>) -> impl IntoView {
    let chart = LineChart::new(&data, Frame::default());
    let frame = chart.frame;
    let line = chart.line_path();
    let area = chart.area_path();

    view! {
        <svg class="line-chart" viewBox=frame.view_box() role="img" aria-label="Prix moyen au m²">
            {chart
                .ticks
                .iter()
                .map(|tick| view! {
                    <g class="tick">
                        <line x1=frame.left() x2=frame.right() y1=tick.y y2=tick.y />
                        <text x=frame.left() - 8.0 y=tick.y + 4.0 text-anchor="end">
                            {format!("{} €", tick.value)}
                        </text>
                    </g>
                })
                .collect_view()}
            <path class="area" d=area />
            <path class="line" d=line />
            {chart
                .points
                .iter()
                .map(|point| view! {
                    <g class="point">
                        <circle cx=point.x cy=point.y r="4">
                            <title>{format_price_per_m2(i64::from(point.value))}</title>
                        </circle>
                        <text x=point.x y=frame.bottom() + 20.0 text-anchor="middle">
                            {point.label.clone()}
                        </text>
                    </g>
                })
                .collect_view()}
        </svg>
    }
}

#[component]
fn DistributionChart(distribution: TypeDistribution) -> impl IntoView {
    let slices = pie_slices(&distribution, PIE_CENTER, PIE_CENTER, PIE_RADIUS);
    let size = PIE_CENTER * 2.0;

    view! {
        <div class="pie-chart">
            <svg viewBox=format!("0 0 {size} {size}") role="img" aria-label="Répartition des types de biens">
                {slices
                    .iter()
                    .map(|slice| view! {
                        <path class="slice" d=slice.path.clone() fill=slice.color>
                            <title>{legend_label(slice)}</title>
                        </path>
                    })
                    .collect_view()}
            </svg>
            <ul class="legend">
                {slices
                    .iter()
                    .map(|slice| view! {
                        <li>
                            <span class="swatch" style=format!("background-color: {};", slice.color)></span>
                            {legend_label(slice)}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn legend_label(slice: &PieSlice) -> String {
    format!("{}: {}%", slice.category.plural_label(), slice.percent)
}

#[component]
fn StatCard(stat: MarketStat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{stat.label}</p>
            <p class=format!("stat-value {}", stat.trend.css_class())>{stat.value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use immo_core::data;

    #[test]
    fn test_market_trends_component_exists() {
        let _component = MarketTrends;
    }

    #[test]
    fn test_legend_label() -> immo_core::Result<()> {
        let slices = pie_slices(&data::type_distribution()?, PIE_CENTER, PIE_CENTER, PIE_RADIUS);
        let labels: Vec<String> = slices.iter().map(legend_label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("Appartements: 35%"));
        Ok(())
    }
}
