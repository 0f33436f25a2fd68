//! Line chart of saved final grades.

use leptos::prelude::*;

use crate::commands::HistoryEntry;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 28.0;

/// Map grades onto SVG coordinates. The y axis spans 0-100; values outside
/// that range are pinned to the edge.
pub fn chart_points(grades: &[f64], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    let plot_w = width - 2.0 * padding;
    let plot_h = height - 2.0 * padding;
    let step = if grades.len() > 1 {
        plot_w / (grades.len() - 1) as f64
    } else {
        0.0
    };

    grades
        .iter()
        .enumerate()
        .map(|(i, grade)| {
            let x = if grades.len() == 1 {
                width / 2.0
            } else {
                padding + step * i as f64
            };
            let y = height - padding - grade.clamp(0.0, 100.0) / 100.0 * plot_h;
            (x, y)
        })
        .collect()
}

#[component]
pub fn HistoryChart(#[prop(into)] entries: Signal<Vec<HistoryEntry>>) -> impl IntoView {
    let points = move || {
        let grades: Vec<f64> = entries.get().iter().map(|e| e.grade).collect();
        chart_points(&grades, WIDTH, HEIGHT, PADDING)
    };

    let polyline = move || {
        points()
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let gridlines = [0.0, 25.0, 50.0, 75.0, 100.0]
        .into_iter()
        .map(|level: f64| {
            let y = HEIGHT - PADDING - level / 100.0 * (HEIGHT - 2.0 * PADDING);
            view! {
                <g class="chart-grid">
                    <line
                        x1={PADDING.to_string()}
                        x2={(WIDTH - PADDING).to_string()}
                        y1={y.to_string()}
                        y2={y.to_string()}
                    />
                    <text x="4" y={(y + 4.0).to_string()}>{level.to_string()}</text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="history-chart" viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} role="img">
            {gridlines}
            <polyline class="chart-line" fill="none" points=polyline />
            {move || {
                let labels: Vec<String> = entries.get().iter().map(|e| e.date().to_string()).collect();
                points()
                    .into_iter()
                    .zip(labels)
                    .map(|((x, y), label)| {
                        view! {
                            <g class="chart-point">
                                <circle cx={x.to_string()} cy={y.to_string()} r="4" />
                                <text
                                    class="chart-label"
                                    x={x.to_string()}
                                    y={(HEIGHT - 6.0).to_string()}
                                    text-anchor="middle"
                                >
                                    {label}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </svg>
    }
}
