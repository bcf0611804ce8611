use crate::models::DailyStats;

pub fn render_index(date: &str, stats: &DailyStats) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &stats.total_smiles.to_string())
        .replace("{{BACK}}", &stats.smiles_back.to_string())
        .replace("{{NEW}}", &stats.total_new_smiles.to_string())
        .replace("{{PEOPLE_WORD}}", plural(stats.total_smiles, "person", "people"))
        .replace(
            "{{BACK_WORD}}",
            plural(stats.smiles_back, "person smiled", "people smiled"),
        )
        .replace("{{SMILE_WORD}}", plural(stats.total_new_smiles, "smile", "smiles"))
        .replace("{{BACK_HIDDEN}}", hidden(stats.smiles_back == 0))
        .replace("{{NEW_HIDDEN}}", hidden(stats.total_new_smiles == 0))
        .replace("{{HINT_HIDDEN}}", hidden(stats.total_smiles > 0))
}

fn plural<'a>(count: u64, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn hidden(is_hidden: bool) -> &'static str {
    if is_hidden { " hidden" } else { "" }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>SmileBack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fff8ef;
      --bg-2: #ffe3bf;
      --ink: #3d3127;
      --warm: #d97706;
      --warm-deep: #92400e;
      --smile: #16a34a;
      --smile-deep: #15803d;
      --muted: #8a8178;
      --card: rgba(255, 255, 255, 0.82);
      --shadow: 0 24px 60px rgba(146, 64, 14, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffedd5 60%, #fef3e2 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 48px;
    }

    .app {
      width: min(460px, 100%);
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      text-align: center;
      display: grid;
      gap: 6px;
    }

    .title-row {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 5vw, 2.6rem);
      margin: 0;
      color: var(--warm-deep);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .help-btn {
      appearance: none;
      border: none;
      background: transparent;
      color: var(--warm);
      font-size: 1.2rem;
      width: 38px;
      height: 38px;
      border-radius: 50%;
      cursor: pointer;
      transition: background 150ms ease;
    }

    .help-btn:hover {
      background: rgba(217, 119, 6, 0.12);
    }

    .stats-card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 26px;
      box-shadow: var(--shadow);
      border: 1px solid rgba(146, 64, 14, 0.08);
      padding: 28px 24px;
      display: grid;
      gap: 14px;
      text-align: center;
    }

    .headline {
      font-size: 1.4rem;
      font-weight: 600;
      margin: 0;
    }

    .headline .count {
      color: var(--warm);
    }

    .returned {
      margin: 0;
      font-size: 1.1rem;
      font-weight: 500;
      color: var(--smile-deep);
    }

    .returned .count {
      color: var(--smile);
    }

    .impact {
      margin: 0;
      padding-top: 12px;
      border-top: 1px solid rgba(146, 64, 14, 0.12);
      font-size: 1.1rem;
      font-weight: 600;
      color: var(--warm-deep);
    }

    .impact .count {
      color: var(--warm);
    }

    .actions {
      display: grid;
      gap: 14px;
    }

    .actions form {
      display: contents;
    }

    button.action {
      appearance: none;
      border: none;
      border-radius: 18px;
      padding: 20px 24px;
      font-family: inherit;
      font-size: 1.15rem;
      font-weight: 600;
      color: white;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button.action:active {
      transform: scale(0.97);
    }

    .btn-back {
      background: var(--smile);
      box-shadow: 0 10px 24px rgba(22, 163, 74, 0.3);
    }

    .btn-back:hover {
      background: var(--smile-deep);
    }

    .btn-none {
      background: #a8a29e;
      box-shadow: 0 10px 24px rgba(120, 113, 108, 0.3);
    }

    .btn-none:hover {
      background: #78716c;
    }

    .hint {
      margin: 0;
      text-align: center;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .status {
      min-height: 1.2em;
      text-align: center;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--smile-deep);
    }

    dialog {
      border: 1px solid rgba(146, 64, 14, 0.15);
      border-radius: 22px;
      padding: 26px;
      width: min(420px, 90vw);
      background: var(--bg-1);
      color: var(--ink);
      box-shadow: var(--shadow);
    }

    dialog::backdrop {
      background: rgba(61, 49, 39, 0.4);
    }

    dialog h2 {
      margin: 0 0 12px;
      font-family: "Fraunces", "Georgia", serif;
      color: var(--warm-deep);
    }

    dialog ol {
      margin: 0;
      padding-left: 20px;
      display: grid;
      gap: 10px;
      font-size: 0.95rem;
    }

    dialog .footnote {
      margin: 14px 0 0;
      padding-top: 12px;
      border-top: 1px solid rgba(146, 64, 14, 0.12);
      font-size: 0.85rem;
      color: var(--muted);
    }

    .dialog-close {
      margin-top: 16px;
      width: 100%;
      border: none;
      border-radius: 12px;
      padding: 10px;
      font-family: inherit;
      font-weight: 600;
      background: var(--warm);
      color: white;
      cursor: pointer;
    }

    .date {
      text-align: center;
      font-size: 0.8rem;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      color: var(--muted);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 480px) {
      button.action {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div class="title-row">
        <h1>SmileBack &#128513;</h1>
        <button class="help-btn" id="help-btn" type="button" aria-label="How it works">?</button>
      </div>
      <p class="subtitle">Spread joy, one smile at a time</p>
      <p class="date" id="date">{{DATE}}</p>
    </header>

    <section class="stats-card">
      <p class="headline">
        You smiled at <span class="count" id="total">{{TOTAL}}</span>
        <span id="people-word">{{PEOPLE_WORD}}</span> today
      </p>
      <p class="returned" id="returned"{{BACK_HIDDEN}}>
        <span class="count" id="back">{{BACK}}</span>
        <span id="back-word">{{BACK_WORD}}</span> back
      </p>
      <p class="impact" id="impact"{{NEW_HIDDEN}}>
        You brought <span class="count" id="new">{{NEW}}</span>
        new <span id="smile-word">{{SMILE_WORD}}</span> to this world today! &#10024;
      </p>
    </section>

    <section class="actions">
      <form id="back-form" method="post" action="/smile/back">
        <button class="action btn-back" type="submit">&#128513; Person Smiled Back</button>
      </form>
      <form id="none-form" method="post" action="/smile/none">
        <button class="action btn-none" type="submit">&#128532; Person Didn't Smile Back</button>
      </form>
    </section>

    <p class="hint" id="hint"{{HINT_HIDDEN}}>Start spreading smiles! Tap a button when you smile at someone.</p>
    <div class="status" id="status"></div>
  </main>

  <dialog id="help">
    <h2>How it works</h2>
    <ol>
      <li><strong>Smile at someone</strong> in real life - a stranger, friend, or colleague.</li>
      <li><strong>Record the interaction:</strong> tap "Person Smiled Back" if they returned your
        smile, or "Person Didn't Smile Back" if they didn't respond.</li>
      <li><strong>Watch your impact grow!</strong> See how many new smiles you've brought to the
        world today.</li>
    </ol>
    <p class="footnote">Every smile you give creates positivity. When someone smiles back,
      you've created two new smiles! &#10024;</p>
    <button class="dialog-close" id="help-close" type="button">Got it</button>
  </dialog>

  <script>
    const dateEl = document.getElementById('date');
    const totalEl = document.getElementById('total');
    const peopleWordEl = document.getElementById('people-word');
    const returnedEl = document.getElementById('returned');
    const backEl = document.getElementById('back');
    const backWordEl = document.getElementById('back-word');
    const impactEl = document.getElementById('impact');
    const newEl = document.getElementById('new');
    const smileWordEl = document.getElementById('smile-word');
    const hintEl = document.getElementById('hint');
    const statusEl = document.getElementById('status');
    const helpEl = document.getElementById('help');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateUI = (data) => {
      dateEl.textContent = data.date;
      totalEl.textContent = data.total_smiles;
      peopleWordEl.textContent = data.total_smiles === 1 ? 'person' : 'people';
      backEl.textContent = data.smiles_back;
      backWordEl.textContent = data.smiles_back === 1 ? 'person smiled' : 'people smiled';
      returnedEl.hidden = data.smiles_back === 0;
      newEl.textContent = data.total_new_smiles;
      smileWordEl.textContent = data.total_new_smiles === 1 ? 'smile' : 'smiles';
      impactEl.hidden = data.total_new_smiles === 0;
      hintEl.hidden = data.total_smiles > 0;
    };

    const send = async (action) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/smile', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ action })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      updateUI(await res.json());
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      updateUI(await res.json());
    };

    document.getElementById('back-form').addEventListener('submit', (event) => {
      event.preventDefault();
      send('smile_back').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('none-form').addEventListener('submit', (event) => {
      event.preventDefault();
      send('no_smile_back').catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('help-btn').addEventListener('click', () => helpEl.showModal());
    document.getElementById('help-close').addEventListener('click', () => helpEl.close());

    loadToday().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
