//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static BOX_PLOT_JS: &str = include_str!("../assets/js/box-plot.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");

/// Global functions defined by the chart scripts, promoted to `window`.
const CHART_FUNCTIONS: [&str; 10] = [
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "renderAreaChart",
    "renderPieChart",
    "renderBarChart",
    "renderBoxPlot",
    "renderLineChart",
    "renderHeatmap",
    "clearChart",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HBD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn all_chart_scripts() -> String {
    [
        TOOLTIP_JS,
        AREA_CHART_JS,
        PIE_CHART_JS,
        BAR_CHART_JS,
        BOX_PLOT_JS,
        LINE_CHART_JS,
        HEATMAP_JS,
    ]
    .join("\n")
}

/// Escape a JSON string for embedding inside a single-quoted JS literal.
pub fn escape_js_arg(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
        .replace('\r', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// ready, then each function is promoted to `window.*` explicitly.
/// Safe to call more than once.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__hbdChartsReady) {{ window.__hbdChartScripts = {}; }}",
        serde_json::to_string(&all_chart_scripts()).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__hbdChartsReady || window.__hbdChartsLoading) return;
            window.__hbdChartsLoading = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__hbdChartScripts);
                    delete window.__hbdChartScripts;
                    {promote}
                    window.__hbdChartsReady = true;
                    console.log('HBD charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until D3, the chart scripts and the container element exist, then
/// call `window.<function>(container, data, config)`.
///
/// A newer render request for the same container cancels an older pending one.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_arg(data_json);
    let escaped_config = escape_js_arg(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var tokens = window.__hbdRenderTokens = window.__hbdRenderTokens || {{}};
            var token = (tokens['{container_id}'] || 0) + 1;
            tokens['{container_id}'] = token;
            var poll = setInterval(function() {{
                if (tokens['{container_id}'] !== token) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__hbdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[HBD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Step area chart (monthly booking volume).
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderAreaChart", container_id, data_json, config_json);
}

/// Donut pie chart (bookings by hotel type).
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Color-scaled bar chart, vertical or horizontal per config.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Box plot of per-group distributions (ADR by hotel type).
pub fn render_box_plot(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBoxPlot", container_id, data_json, config_json);
}

/// Line chart with markers (monthly cancellation rate).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Annotated heatmap (correlation matrix).
pub fn render_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHeatmap", container_id, data_json, config_json);
}
