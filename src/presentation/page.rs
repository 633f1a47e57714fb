// Embedded dashboard page
pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Compressor Condition Monitoring</title>
    <style>
        :root {
            --bg: #f8fafc;
            --surface: #ffffff;
            --border: #e2e8f0;
            --text: #1e293b;
            --muted: #64748b;
            --accent: #2563eb;
            --warn: #b45309;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }

        .container {
            max-width: 1100px;
            margin: 0 auto;
            padding: 1.5rem;
        }

        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 1.5rem;
            flex-wrap: wrap;
            gap: 1rem;
        }
        h1 { font-size: 1.25rem; font-weight: 600; }

        .controls {
            display: flex;
            gap: 1rem;
            flex-wrap: wrap;
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 1rem;
            margin-bottom: 1rem;
        }
        .control { display: flex; flex-direction: column; gap: 0.25rem; }
        .control label { font-size: 0.75rem; color: var(--muted); }
        .control select {
            min-width: 11rem;
            padding: 0.4rem 0.6rem;
            border: 1px solid var(--border);
            border-radius: 0.375rem;
            background: var(--surface);
            font-size: 0.875rem;
        }

        .chart-card {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 0.5rem;
        }
        #chart { width: 100%; height: 480px; }

        .stale-banner {
            display: none;
            margin-bottom: 0.75rem;
            padding: 0.5rem 0.75rem;
            border: 1px solid var(--warn);
            border-radius: 0.375rem;
            color: var(--warn);
            font-size: 0.8rem;
        }
        .stale-banner.visible { display: block; }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Compressor Condition Monitoring</h1>
        </header>

        <div class="controls">
            <div class="control">
                <label for="metric">Select chart type:</label>
                <select id="metric"></select>
            </div>
            <div class="control">
                <label for="compressor">Select compressor ID:</label>
                <select id="compressor"></select>
            </div>
            <div class="control">
                <label for="sensor">Select Sensor ID:</label>
                <select id="sensor"></select>
            </div>
        </div>

        <div id="stale" class="stale-banner">
            Data source unavailable &mdash; showing the last successful update.
        </div>

        <div class="chart-card">
            <div id="chart"></div>
        </div>
    </div>

    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<script>
const api = url => fetch(url).then(r => r.json());

let view = null;

function fillSelect(id, options, selected) {
    const select = document.getElementById(id);
    if (document.activeElement === select) return;

    select.innerHTML = options.map(o =>
        `<option value="${o.value}">${o.label}</option>`
    ).join('');
    select.value = selected ?? '';
}

function renderControls() {
    fillSelect('metric', view.metric_options, view.metric);
    fillSelect('compressor', view.compressor_options, view.compressor);
    fillSelect('sensor', view.sensor_options, view.sensor);
}

function renderChart() {
    const fig = view.figure;
    Plotly.react('chart', [{
        x: fig.series.timestamps,
        y: fig.series.values,
        mode: 'lines',
    }], {
        title: { text: fig.title, x: fig.title_x, y: fig.title_y },
        xaxis: { title: { text: fig.x_axis_title } },
        yaxis: { title: { text: fig.y_axis_title } },
        margin: { t: 60, r: 20 },
    }, {
        displayModeBar: view.display.display_mode_bar,
        responsive: true,
    });
}

function renderAll() {
    renderControls();
    renderChart();
    document.getElementById('stale').classList.toggle('visible', view.data_stale);
}

async function sendEvent(event, value) {
    view = await fetch('/api/event', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ event, value }),
    }).then(r => r.json());
    renderAll();
}

async function init() {
    view = await api('/api/view');
    renderAll();

    for (const id of ['metric', 'compressor', 'sensor']) {
        document.getElementById(id).addEventListener('change', e => {
            e.target.blur();
            sendEvent(id, e.target.value);
        });
    }

    // The server refreshes on its own timer; re-read the view on the same
    // cadence to pick up new data.
    setInterval(async () => {
        view = await api('/api/view');
        renderAll();
    }, view.refresh_period_secs * 1000);
}

init();
</script>
</body>
</html>
"##;
