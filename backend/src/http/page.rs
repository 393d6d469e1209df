//! Embedded dashboard page.
//!
//! The page builds itself from `GET /v1/layout` and posts every dropdown or
//! slider change to `POST /v1/selection`, then draws the returned figures
//! with Plotly.

pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>SpaceX Launch Records Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;margin:24px}
select{width:100%;padding:6px;font-size:14px}
.slider{display:flex;align-items:center;gap:12px;margin:8px 0}
.slider input[type=range]{flex:1}
.marks{display:flex;justify-content:space-between;font-size:11px;color:#777}
.graph{min-height:420px}
</style>
</head>
<body>
<h1 id="heading"></h1>
<select id="site-dropdown"><option value="" disabled selected>Select a launch site</option></select>
<br>
<div id="success-pie-chart" class="graph"></div>
<br>
<div class="slider">
  <span id="payload-min-label"></span>
  <input id="payload-min" type="range">
  <input id="payload-max" type="range">
  <span id="payload-max-label"></span>
</div>
<div id="payload-marks" class="marks"></div>
<br>
<div id="success-payload-scatter-chart" class="graph"></div>
<script>
const state = { site: null, range: [0, 0] };

function pieTraces(fig) {
  return [{
    type: 'pie',
    labels: fig.slices.map(s => s.label),
    values: fig.slices.map(s => s.value),
  }];
}

function scatterTraces(fig) {
  return fig.traces.map(t => ({
    type: 'scatter',
    mode: 'markers',
    name: t.name,
    x: t.x,
    y: t.y,
  }));
}

function draw(update) {
  const fig = update.figure;
  const layout = { title: { text: fig.title } };
  if (fig.type === 'pie') {
    Plotly.react(update.output_id, pieTraces(fig), layout);
  } else {
    layout.xaxis = { title: { text: fig.x_field } };
    layout.yaxis = { title: { text: fig.y_field } };
    layout.legend = { title: { text: fig.color_field } };
    Plotly.react(update.output_id, scatterTraces(fig), layout);
  }
}

async function dispatch(changed) {
  const response = await fetch('/v1/selection', {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify({ site: state.site, payload_range: state.range, changed }),
  });
  if (!response.ok) {
    console.error(await response.text());
    return;
  }
  const body = await response.json();
  body.updates.forEach(draw);
}

function syncRange() {
  const lo = document.getElementById('payload-min');
  const hi = document.getElementById('payload-max');
  let a = Number(lo.value), b = Number(hi.value);
  if (a > b) { [a, b] = [b, a]; }
  state.range = [a, b];
  document.getElementById('payload-min-label').textContent = a;
  document.getElementById('payload-max-label').textContent = b;
}

async function init() {
  const layout = await (await fetch('/v1/layout')).json();

  const heading = document.getElementById('heading');
  heading.textContent = layout.heading.text;
  heading.style.textAlign = layout.heading.text_align;
  heading.style.color = layout.heading.color;
  heading.style.fontSize = layout.heading.font_size + 'px';

  const dropdown = document.getElementById(layout.site_dropdown.id);
  layout.site_dropdown.options.forEach(o => dropdown.add(new Option(o.label, o.value)));
  dropdown.addEventListener('change', () => {
    state.site = dropdown.value;
    dispatch(['site-dropdown']);
  });

  const spec = layout.payload_slider;
  ['payload-min', 'payload-max'].forEach((id, i) => {
    const input = document.getElementById(id);
    input.min = spec.min;
    input.max = spec.max;
    input.step = spec.step;
    input.value = spec.value[i];
    input.addEventListener('change', () => { syncRange(); dispatch(['payload-slider']); });
  });
  document.getElementById('payload-marks').textContent =
    Object.entries(spec.marks).map(([k, v]) => k + ': ' + v).join('   ');
  syncRange();
  state.range = spec.value;

  dispatch(['site-dropdown', 'payload-slider']);
}

init();
</script>
</body>
</html>
"##;
