//! Embedded chat page
//!
//! The whole UI ships as one self-contained HTML document so the binary
//! needs no static asset directory. The page keeps its message list in
//! browser memory only; reloading starts a fresh conversation.

/// Chat page served at `GET /`
pub const CHAT_PAGE: &str = r##"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>GlobalRegAI</title>
<style>
  body { font-family: system-ui; margin: 0; color: #111827; }
  .app { max-width: 760px; margin: 40px auto; padding: 16px; }
  .app h1 { margin-bottom: 4px; }
  .app .tagline { margin-top: 0; color: #4b5563; }
  .search-input-container { display: flex; gap: 8px; margin-top: 12px; }
  .search-input-container input { flex: 1; padding: 10px; font-size: 16px; }
  .search-input-container button { padding: 10px 16px; font-size: 16px; }
  .chat-history { margin-top: 20px; display: grid; gap: 10px; }
  .chat-message .message-bubble {
    white-space: pre-wrap;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    padding: 12px;
  }
  .chat-message.user .message-bubble { background: #f3f4f6; }
  .chat-message.ai .message-bubble { background: #eef6ff; }
  .sources-container { margin-top: 8px; font-size: 14px; color: #374151; }
  .sources-container ul { margin: 4px 0 0; padding-left: 20px; }
  .loading-spinner {
    width: 16px;
    height: 16px;
    border: 2px solid #e5e7eb;
    border-top-color: #3b82f6;
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
  }
  @keyframes spin { to { transform: rotate(360deg); } }
</style>
</head>
<body>
<div class="app">
  <h1>GlobalRegAI 🚀</h1>
  <p class="tagline">AI 기반 규제·법령 Q&A. 모르면 한계를 밝히고, 확실한 건 간결하게 요약합니다.</p>

  <form class="search-input-container" id="ask-form">
    <input type="text" id="question" placeholder="예: 미국 FDA 의료기기 510(k) 제출 요건 핵심을 요약해줘" autocomplete="off">
    <button type="submit" id="submit">질문</button>
  </form>

  <div class="chat-history" id="history"></div>
</div>

<script>
const form = document.getElementById("ask-form");
const input = document.getElementById("question");
const button = document.getElementById("submit");
const history = document.getElementById("history");
let loading = false;

function addMessage(sender, text, sources) {
  const wrapper = document.createElement("div");
  wrapper.className = "chat-message " + sender;
  const bubble = document.createElement("div");
  bubble.className = "message-bubble";
  const body = document.createElement("p");
  body.style.margin = "0";
  body.textContent = text;
  bubble.appendChild(body);

  if (sender === "ai" && Array.isArray(sources) && sources.length > 0) {
    const container = document.createElement("div");
    container.className = "sources-container";
    const label = document.createElement("strong");
    label.textContent = "[근거 자료]";
    container.appendChild(label);
    const list = document.createElement("ul");
    for (const src of sources) {
      const item = document.createElement("li");
      item.textContent = src.source + " (페이지: " + src.page + ")";
      list.appendChild(item);
    }
    container.appendChild(list);
    bubble.appendChild(container);
  }

  wrapper.appendChild(bubble);
  history.appendChild(wrapper);
  wrapper.scrollIntoView({ block: "end" });
  return wrapper;
}

function setLoading(value) {
  loading = value;
  input.disabled = value;
  button.disabled = value;
  button.textContent = value ? "조회중…" : "질문";
}

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  const question = input.value.trim();
  if (!question || loading) return;

  addMessage("user", question);
  input.value = "";
  setLoading(true);
  const pending = addMessage("ai", "");
  pending.querySelector(".message-bubble").innerHTML = '<div class="loading-spinner"></div>';

  try {
    const resp = await fetch("/api/ask", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ question }),
    });
    const data = await resp.json();
    const answer = data?.answer ?? data?.error ?? "응답 없음";
    pending.remove();
    addMessage("ai", answer, data?.sources);
  } catch (e) {
    pending.remove();
    addMessage("ai", "네트워크 오류: " + (e?.message || e));
  } finally {
    setLoading(false);
  }
});
</script>
</body>
</html>
"##;
