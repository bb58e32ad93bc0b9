use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const PANEL_BG: RGBColor = RGBColor(15, 10, 31);
const AXIS: RGBColor = RGBColor(75, 60, 120);
const MUTED: RGBColor = RGBColor(156, 163, 175);
const SKY: RGBColor = RGBColor(45, 182, 255);
const VIOLET: RGBColor = RGBColor(154, 59, 255);

/// Illustrative dashboard data shown on the marketing page; the real
/// analytics live behind app.tapbak.co.
pub const CUSTOMER_GROWTH: &[(&str, i32)] = &[
    ("Jan", 45),
    ("Feb", 78),
    ("Mar", 125),
    ("Apr", 189),
    ("May", 267),
    ("Jun", 342),
];

pub const MONTHLY_TRANSACTIONS: &[(&str, i32)] = &[
    ("Jan", 234),
    ("Feb", 389),
    ("Mar", 567),
    ("Apr", 728),
    ("May", 945),
    ("Jun", 1234),
];

fn draw_customer_growth(canvas: HtmlCanvasElement) {
    canvas.set_width(600);
    canvas.set_height(300);

    let backend = match CanvasBackend::with_canvas_object(canvas) {
        Some(backend) => backend,
        None => return,
    };
    let root = backend.into_drawing_area();
    root.fill(&PANEL_BG).unwrap();

    let max = CUSTOMER_GROWTH.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0..CUSTOMER_GROWTH.len() - 1, 0..max + max / 10)
        .unwrap();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(AXIS.mix(0.2))
        .x_labels(CUSTOMER_GROWTH.len())
        .x_label_formatter(&|x| {
            CUSTOMER_GROWTH
                .get(*x)
                .map(|(month, _)| month.to_string())
                .unwrap_or_default()
        })
        .axis_style(&AXIS)
        .label_style(("sans-serif", 12).into_font().color(&MUTED))
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(
            CUSTOMER_GROWTH
                .iter()
                .enumerate()
                .map(|(i, (_, customers))| (i, *customers)),
            SKY.stroke_width(3),
        ))
        .unwrap();

    chart
        .draw_series(
            CUSTOMER_GROWTH
                .iter()
                .enumerate()
                .map(|(i, (_, customers))| Circle::new((i, *customers), 4, SKY.filled())),
        )
        .unwrap();
}

fn draw_transactions(canvas: HtmlCanvasElement) {
    canvas.set_width(600);
    canvas.set_height(300);

    let backend = match CanvasBackend::with_canvas_object(canvas) {
        Some(backend) => backend,
        None => return,
    };
    let root = backend.into_drawing_area();
    root.fill(&PANEL_BG).unwrap();

    let max = MONTHLY_TRANSACTIONS
        .iter()
        .map(|(_, v)| *v)
        .max()
        .unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0..MONTHLY_TRANSACTIONS.len() - 1, 0..max + max / 10)
        .unwrap();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(AXIS.mix(0.2))
        .x_labels(MONTHLY_TRANSACTIONS.len())
        .x_label_formatter(&|x| {
            MONTHLY_TRANSACTIONS
                .get(*x)
                .map(|(month, _)| month.to_string())
                .unwrap_or_default()
        })
        .axis_style(&AXIS)
        .label_style(("sans-serif", 12).into_font().color(&MUTED))
        .draw()
        .unwrap();

    chart
        .draw_series(
            AreaSeries::new(
                MONTHLY_TRANSACTIONS
                    .iter()
                    .enumerate()
                    .map(|(i, (_, transactions))| (i, *transactions)),
                0,
                VIOLET.mix(0.35),
            )
            .border_style(VIOLET.stroke_width(3)),
        )
        .unwrap();
}

/// Static preview charts for the analytics section, drawn once on mount.
#[function_component(AnalyticsCharts)]
pub fn analytics_charts() -> Html {
    let growth_ref = use_node_ref();
    let transactions_ref = use_node_ref();

    {
        let growth_ref = growth_ref.clone();
        let transactions_ref = transactions_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = growth_ref.cast::<HtmlCanvasElement>() {
                    draw_customer_growth(canvas);
                }
                if let Some(canvas) = transactions_ref.cast::<HtmlCanvasElement>() {
                    draw_transactions(canvas);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="charts-grid">
            <div class="chart-panel">
                <h3>{"Customer Growth"}</h3>
                <p>{"Track your growing customer base over time"}</p>
                <canvas ref={growth_ref} width="600" height="300" style="max-width: 100%;" />
            </div>
            <div class="chart-panel">
                <h3>{"Transactions & Revenue"}</h3>
                <p>{"Monitor transaction volume and revenue trends"}</p>
                <canvas ref={transactions_ref} width="600" height="300" style="max-width: 100%;" />
            </div>

            <style>
                {r#"
                .charts-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .chart-panel {
                    background: rgba(15, 10, 31, 0.6);
                    backdrop-filter: blur(10px);
                    border: 2px solid rgba(127, 32, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                }

                .chart-panel h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem;
                }

                .chart-panel p {
                    color: #9CA3AF;
                    font-size: 0.9rem;
                    margin: 0 0 1.5rem;
                }

                @media (max-width: 1024px) {
                    .charts-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
