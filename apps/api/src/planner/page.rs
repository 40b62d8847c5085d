//! Static test page for the grid endpoint. Purely illustrative.

use axum::response::Html;

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="it">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Study Grid API</title>
    <style>
        body { font-family: sans-serif; margin: 20px; background: #f4f4f4; }
        .container { max-width: 900px; margin: auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        .input-group { display: flex; flex-direction: column; }
        .weekdays label { font-weight: normal; margin-right: 10px; }
        label { font-weight: bold; margin-bottom: 5px; }
        input, textarea { padding: 8px; border-radius: 4px; border: 1px solid #ccc; }
        textarea { height: 150px; font-family: monospace; }
        button { background: #007bff; color: white; padding: 10px 15px; border: none; border-radius: 4px; cursor: pointer; font-size: 16px; margin-top: 20px; }
        button:hover { background: #0056b3; }
        h2 { border-bottom: 2px solid #eee; padding-bottom: 5px; }
        pre { background: #eee; padding: 10px; border-radius: 4px; white-space: pre-wrap; word-wrap: break-word; }
        #grid-output { font-family: monospace; line-height: 1.4; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Study Grid API</h1>
        <p>Posts to <code>/api/v1/grid/process</code>.</p>

        <div class="form-grid">
            <div class="input-group">
                <label for="target_days">Days</label>
                <input type="number" id="target_days" value="15" min="0">
            </div>
            <div class="input-group">
                <label for="target_hours">Hours per day</label>
                <input type="number" id="target_hours" value="4" min="0">
            </div>
            <div class="input-group">
                <label for="total_pages">Total pages</label>
                <input type="number" id="total_pages" value="1000" min="0">
            </div>
            <div class="input-group">
                <label for="start_date">Start date</label>
                <input type="date" id="start_date">
            </div>
        </div>

        <div class="input-group weekdays" style="margin-top: 20px;">
            <label>Study weekdays (none checked = every day)</label>
            <div>
                <label><input type="checkbox" value="Lun"> Lun</label>
                <label><input type="checkbox" value="Mar"> Mar</label>
                <label><input type="checkbox" value="Mer"> Mer</label>
                <label><input type="checkbox" value="Gio"> Gio</label>
                <label><input type="checkbox" value="Ven"> Ven</label>
                <label><input type="checkbox" value="Sab"> Sab</label>
                <label><input type="checkbox" value="Dom"> Dom</label>
            </div>
        </div>

        <div class="input-group" style="margin-top: 20px;">
            <label for="source_grid">Source grid (JSON, hours x days)</label>
            <textarea id="source_grid">
[["P", "P", "S", "S", "S", "R", "R"],
["P", "S", "S", "S", "S", "R", "R"],
["S", "S", "S", "S", "S", "E", "E"],
["S", "E", "E", "R", "E", "E", "E"]]
            </textarea>
        </div>

        <button id="submitBtn">Process</button>

        <h2>Result</h2>
        <h3>Grid (hours x days)</h3>
        <pre id="grid-output">...</pre>
        <h3>Print simulation</h3>
        <pre id="print-output">...</pre>
    </div>

    <script>
        document.getElementById('submitBtn').addEventListener('click', async () => {
            const gridOut = document.getElementById('grid-output');
            const printOut = document.getElementById('print-output');
            gridOut.textContent = 'Processing...';
            printOut.textContent = '...';

            let sourceGrid;
            try {
                sourceGrid = JSON.parse(document.getElementById('source_grid').value.trim());
            } catch (e) {
                gridOut.textContent = 'ERROR: the source grid is not valid JSON (use double quotes, no trailing commas).';
                return;
            }

            const payload = {
                source_grid: sourceGrid,
                target_days: parseInt(document.getElementById('target_days').value),
                target_hours: parseInt(document.getElementById('target_hours').value),
                total_pages: parseFloat(document.getElementById('total_pages').value),
                allowed_weekdays: Array.from(document.querySelectorAll('.weekdays input:checked')).map(c => c.value)
            };
            const startDate = document.getElementById('start_date').value;
            if (startDate) {
                payload.start_date = startDate;
            }

            try {
                const response = await fetch('/api/v1/grid/process', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(payload)
                });
                const data = await response.json();
                if (!response.ok) {
                    throw new Error((data.error && data.error.message) || 'Unknown error');
                }

                gridOut.textContent = data.grid.map(hourRow => hourRow.join('  ')).join('\n');
                printOut.textContent = JSON.stringify(data.print_summary, null, 2);
            } catch (err) {
                gridOut.textContent = `ERROR: ${err.message}`;
            }
        });
    </script>
</body>
</html>
"#;
