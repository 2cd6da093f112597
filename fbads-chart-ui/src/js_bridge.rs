//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules) exposed via `window.*`. This module serializes
//! data and calls those globals once D3 and the target element are ready.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static CHART_ERROR_JS: &str = include_str!("../assets/js/chart-error.js");

/// Global chart functions promoted to `window` once the scripts are evaluated.
const CHART_FUNCTIONS: &[&str] = &[
    "renderPieChart",
    "renderInsightLines",
    "renderChartError",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Polls (100 ms apart) before a pending chart call is dropped.
const MAX_POLLS: u32 = 100;

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FBADS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Safe to call more than once.
///
/// The chart JS files define functions via `function` declarations. They are
/// evaluated at global scope through an indirect `eval()` once D3 is ready,
/// then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, LINE_CHART_JS, CHART_ERROR_JS].join("\n");

    let promote = CHART_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__fbadsChartsLoading) return;
            window.__fbadsChartsLoading = true;
            window.__fbadsChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__fbadsChartScripts);
                    delete window.__fbadsChartScripts;
                    {promote}
                    window.__fbadsChartsReady = true;
                    console.log('FBADS charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
        promote = promote,
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.<function>(container_id, ...args)` once charts are ready and the
/// container element exists. Gives up after [`MAX_POLLS`] attempts, so a
/// container removed before the call lands does not leave a timer behind.
fn call_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let max_polls = MAX_POLLS;
    let id = js_string(container_id);
    let args = args
        .iter()
        .map(|a| js_string(a))
        .collect::<Vec<_>>()
        .join(", ");
    call_js(&format!(
        r#"
        (function() {{
            var tries = 0;
            var poll = setInterval(function() {{
                tries += 1;
                if (window.__fbadsChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {args});
                    }} catch(e) {{ console.error('[FBADS] {function} error:', e); }}
                }} else if (tries >= {max_polls}) {{
                    clearInterval(poll);
                    console.warn('[FBADS] {function}: #' + {id} + ' not ready, dropped');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a pie (or donut, when the config carries a `hole`) chart.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[FBADS] render pie chart into #{}", container_id);
    call_when_ready("renderPieChart", container_id, &[data_json, config_json]);
}

/// Render one line per insight series.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[FBADS] render line chart into #{}", container_id);
    call_when_ready("renderInsightLines", container_id, &[data_json, config_json]);
}

/// Replace the chart in the container with an error message.
pub fn render_chart_error(container_id: &str, message: &str) {
    call_when_ready("renderChartError", container_id, &[message]);
}
