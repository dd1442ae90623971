pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Diary</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f1e7;
      --bg-2: #e8dcc8;
      --ink: #2b2a28;
      --accent: #3c6ca8;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(43, 42, 40, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #efe6d6 60%, #f7f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .view-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
      margin-bottom: 18px;
    }

    section {
      display: block;
    }

    .entries {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 14px;
    }

    .entry {
      background: white;
      border: 1px solid rgba(43, 42, 40, 0.08);
      border-radius: 16px;
      padding: 16px 18px;
      display: grid;
      gap: 8px;
    }

    .entry-content {
      margin: 0;
      white-space: pre-wrap;
      overflow-wrap: anywhere;
    }

    .entry-meta {
      margin: 0;
      font-size: 0.85rem;
      color: #8b857d;
    }

    .entry-actions {
      display: flex;
      justify-content: flex-end;
      gap: 8px;
    }

    button,
    .button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      background: var(--accent);
      color: white;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active,
    .button:active {
      transform: scale(0.98);
    }

    .secondary {
      background: rgba(43, 42, 40, 0.08);
      color: var(--ink);
    }

    .danger {
      background: transparent;
      color: var(--danger);
      border: 1px solid rgba(198, 59, 43, 0.35);
    }

    form {
      display: grid;
      gap: 12px;
      margin-top: 16px;
    }

    textarea {
      width: 100%;
      resize: vertical;
      font: inherit;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid rgba(43, 42, 40, 0.16);
      background: white;
    }

    textarea:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    .form-actions {
      display: flex;
      gap: 10px;
    }

    .status {
      margin: 0;
      min-height: 1.2em;
      font-size: 0.95rem;
      color: #6b645d;
    }

    .form-error {
      margin: 0;
      min-height: 1.2em;
      font-size: 0.95rem;
      color: var(--danger);
    }

    @media (max-width: 520px) {
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Diary</h1>
      <p class="subtitle">One short entry per day, 140 characters at most.</p>
    </header>

    <section id="list-view">
      <div class="view-header">
        <h2>Entries</h2>
        <a class="button" href="#/new">New entry</a>
      </div>
      <p id="list-status" class="status"></p>
      <ul id="entry-list" class="entries"></ul>
    </section>

    <section id="create-view" hidden>
      <h2>Write today's entry</h2>
      <form id="create-form">
        <textarea id="create-content" rows="6" placeholder="What happened today?"></textarea>
        <p id="create-error" class="form-error"></p>
        <div class="form-actions">
          <button type="submit">Save</button>
          <a class="button secondary" href="#/">Cancel</a>
        </div>
      </form>
    </section>

    <section id="edit-view" hidden>
      <h2>Edit entry</h2>
      <form id="edit-form">
        <textarea id="edit-content" rows="6" placeholder="What happened today?"></textarea>
        <p id="edit-error" class="form-error"></p>
        <div class="form-actions">
          <button type="submit">Update</button>
          <a class="button secondary" href="#/">Cancel</a>
        </div>
      </form>
    </section>
  </main>

  <script>
    const listView = document.getElementById('list-view');
    const createView = document.getElementById('create-view');
    const editView = document.getElementById('edit-view');
    const listStatus = document.getElementById('list-status');
    const entryList = document.getElementById('entry-list');
    const createForm = document.getElementById('create-form');
    const createContent = document.getElementById('create-content');
    const createError = document.getElementById('create-error');
    const editForm = document.getElementById('edit-form');
    const editContent = document.getElementById('edit-content');
    const editError = document.getElementById('edit-error');

    let editId = null;

    const show = (view) => {
      for (const section of [listView, createView, editView]) {
        section.hidden = section !== view;
      }
    };

    const loadEntries = async () => {
      listStatus.textContent = 'Loading...';
      entryList.innerHTML = '';
      try {
        const res = await fetch('/api/diary');
        if (!res.ok) {
          throw new Error('Unable to load entries');
        }
        const entries = await res.json();
        listStatus.textContent = entries.length ? '' : 'No entries yet.';
        for (const entry of entries) {
          entryList.appendChild(renderEntry(entry));
        }
      } catch (err) {
        listStatus.textContent = err.message;
      }
    };

    const renderEntry = (entry) => {
      const item = document.createElement('li');
      item.className = 'entry';

      const content = document.createElement('p');
      content.className = 'entry-content';
      content.textContent = entry.content;

      const meta = document.createElement('p');
      meta.className = 'entry-meta';
      meta.textContent = 'Created ' + new Date(entry.createdAt).toLocaleString();

      const actions = document.createElement('div');
      actions.className = 'entry-actions';

      const edit = document.createElement('button');
      edit.type = 'button';
      edit.className = 'secondary';
      edit.textContent = 'Edit';
      edit.addEventListener('click', () => {
        location.hash = '#/edit/' + entry.id;
      });

      const remove = document.createElement('button');
      remove.type = 'button';
      remove.className = 'danger';
      remove.textContent = 'Delete';
      remove.addEventListener('click', () => deleteEntry(entry.id));

      actions.append(edit, remove);
      item.append(content, meta, actions);
      return item;
    };

    const deleteEntry = async (id) => {
      if (!confirm('Delete this entry?')) {
        return;
      }
      await fetch('/api/diary/' + id, { method: 'DELETE' });
      loadEntries();
    };

    const loadEntry = async (id) => {
      editId = id;
      editError.textContent = '';
      editContent.value = '';
      const res = await fetch('/api/diary/' + id);
      if (res.ok) {
        const data = await res.json();
        editContent.value = data.content || '';
      } else {
        editError.textContent = 'Entry not found';
      }
    };

    createForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      createError.textContent = '';
      const res = await fetch('/api/diary', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ content: createContent.value })
      });
      if (res.ok) {
        location.hash = '#/';
      } else {
        const data = await res.json().catch(() => ({}));
        createError.textContent = data.error || 'Failed to save entry';
      }
    });

    editForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (editId === null) {
        return;
      }
      editError.textContent = '';
      const res = await fetch('/api/diary/' + editId, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ content: editContent.value })
      });
      if (res.ok) {
        location.hash = '#/';
      } else {
        const data = await res.json().catch(() => ({}));
        editError.textContent = data.error || 'Failed to update entry';
      }
    });

    const route = () => {
      const editMatch = location.hash.match(/^#\/edit\/(.+)$/);
      if (editMatch) {
        show(editView);
        loadEntry(editMatch[1]);
      } else if (location.hash === '#/new') {
        show(createView);
        createError.textContent = '';
        createContent.value = '';
        createContent.focus();
      } else {
        show(listView);
        loadEntries();
      }
    };

    window.addEventListener('hashchange', route);
    route();
  </script>
</body>
</html>
"##;
