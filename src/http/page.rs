use crate::config::SpeechConfig;

/// Values baked into the rendered host page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub service_name: String,
    pub speech: SpeechConfig,
}

/// Render the host page with both widgets embedded.
///
/// The page script probes the browser's speech capabilities once at load,
/// reports them to the bridge, wires the recognition callbacks to the event
/// bridge (in delivery order), polls the capture state for display, and
/// loads queued playback payloads into hidden frames.
pub fn render(ctx: &PageContext) -> String {
    TEMPLATE
        .replace("{{service_name}}", &ctx.service_name)
        .replace("{{locale}}", &ctx.speech.locale)
        .replace("{{continuous}}", bool_literal(ctx.speech.continuous))
        .replace("{{interim_results}}", bool_literal(ctx.speech.interim_results))
}

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{{service_name}}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
            margin: 0;
            padding: 20px;
            display: flex;
            flex-direction: column;
            align-items: center;
        }

        .main-header {
            text-align: center;
            color: #667eea;
            font-size: 3rem;
            font-weight: 300;
            margin-bottom: 0.5rem;
        }

        .description {
            text-align: center;
            color: #666;
            font-size: 1.2rem;
            margin-bottom: 2rem;
        }

        .container {
            background: rgba(255,255,255,0.9);
            border-radius: 20px;
            padding: 30px;
            width: 100%;
            max-width: 500px;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
            border: 1px solid rgba(255,255,255,0.2);
            margin-bottom: 2rem;
        }

        #transcript {
            background: #f8f9fa;
            color: #333;
            border: 2px solid #e9ecef;
            border-radius: 15px;
            padding: 20px;
            margin: 20px 0;
            min-height: 120px;
            font-size: 1.1em;
            line-height: 1.6;
            white-space: pre-wrap;
            overflow-y: auto;
            max-height: 200px;
        }

        .buttons {
            display: flex;
            gap: 15px;
            justify-content: center;
            margin-top: 20px;
        }

        button {
            border: none;
            padding: 12px 24px;
            border-radius: 25px;
            font-size: 16px;
            font-weight: 500;
            cursor: pointer;
            min-width: 80px;
        }

        button:disabled {
            opacity: 0.5;
            cursor: default;
        }

        #startBtn {
            background: linear-gradient(45deg, #2ecc71, #27ae60);
            color: white;
        }

        #stopBtn {
            background: linear-gradient(45deg, #e74c3c, #c0392b);
            color: white;
        }

        #speakBtn {
            background: linear-gradient(45deg, #667eea, #5a6fd6);
            color: white;
        }

        .status {
            text-align: center;
            margin-top: 15px;
            font-size: 0.9em;
            color: #666;
            min-height: 20px;
        }

        .listening {
            color: #2ecc71 !important;
            font-weight: bold;
        }

        .error {
            color: #e74c3c;
            background: #ffeaea;
            padding: 10px;
            border-radius: 8px;
            margin-top: 10px;
            text-align: center;
            font-size: 0.9em;
        }

        .tts-header {
            text-align: center;
            color: #4a4a4a;
            font-size: 2.5rem;
            font-weight: 300;
            margin-top: 2rem;
            margin-bottom: 1rem;
            border-top: 2px dashed #dcdcdc;
            padding-top: 2rem;
            width: 100%;
            max-width: 500px;
        }

        #ttsText {
            width: 100%;
            box-sizing: border-box;
            min-height: 120px;
            border: 2px solid #e9ecef;
            border-radius: 15px;
            padding: 15px;
            font-size: 1em;
            font-family: inherit;
            resize: vertical;
        }

        .info {
            color: #666;
            font-size: 0.9em;
            max-width: 500px;
            width: 100%;
        }

        .footer {
            text-align: center;
            color: #666;
            font-size: 0.9em;
            margin-top: 2rem;
            border-top: 1px solid #dcdcdc;
            padding-top: 1rem;
            width: 100%;
            max-width: 500px;
        }
    </style>
</head>
<body>
    <h1 class="main-header">🎤 Speech to Text App</h1>
    <p class="description">Click "Start" to begin converting your speech to text in real-time</p>

    <div class="container">
        <div id="transcript">Click "Start" and speak clearly into your microphone...</div>
        <div class="buttons">
            <button id="startBtn">🎤 Start</button>
            <button id="stopBtn" disabled>⏹️ Stop</button>
        </div>
        <div id="status" class="status">Ready to listen</div>
        <div id="error" class="error" style="display: none;"></div>
    </div>

    <h2 class="tts-header">🔊 Text to AI Speech</h2>
    <p class="description">Enter text below and click "Speak" to hear it read aloud.</p>

    <div class="container">
        <textarea id="ttsText" placeholder="Enter text here:"></textarea>
        <div class="buttons">
            <button id="speakBtn">Speak</button>
        </div>
        <div id="ttsNotice" class="error" style="display: none;"></div>
    </div>

    <details class="info">
        <summary>ℹ️ Information</summary>
        <p><strong>How to use (Speech to Text):</strong>
        click "Start", allow microphone access when prompted, speak clearly,
        and click "Stop" when finished.</p>
        <p><strong>How to use (Text to AI Speech):</strong>
        enter text into the text box, click "Speak", and make sure your
        volume is up.</p>
        <p><strong>Requirements:</strong> a modern browser (Chrome, Edge,
        Safari) and microphone access permission (for speech to text).</p>
        <p>Speech recognition and playback run inside your browser; this page
        only mirrors their state.</p>
    </details>

    <div class="footer">
        {{service_name}} | Speech powered by the browser's Web Speech API
    </div>

    <script>
        const BRIDGE = {
            capability: '/capture/capability',
            start: '/capture/start',
            events: '/capture/events',
            state: '/capture/state',
            speak: '/speak',
            queue: '/playback/queue'
        };

        const SPEECH = {
            locale: '{{locale}}',
            continuous: {{continuous}},
            interimResults: {{interim_results}}
        };

        const PLACEHOLDER = 'Click "Start" and speak clearly into your microphone...';

        let recognition = null;

        const transcript = document.getElementById('transcript');
        const startBtn = document.getElementById('startBtn');
        const stopBtn = document.getElementById('stopBtn');
        const status = document.getElementById('status');
        const errorDiv = document.getElementById('error');
        const ttsText = document.getElementById('ttsText');
        const speakBtn = document.getElementById('speakBtn');
        const ttsNotice = document.getElementById('ttsNotice');

        const capability = {
            recognition: ('webkitSpeechRecognition' in window) || ('SpeechRecognition' in window),
            synthesis: 'speechSynthesis' in window
        };

        function postJson(url, body) {
            return fetch(url, {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(body)
            });
        }

        // Events must reach the controller in recognition order, so every
        // post is chained behind the previous one.
        let eventChain = Promise.resolve();
        function postEvent(event) {
            eventChain = eventChain
                .then(() => postJson(BRIDGE.events, { events: [event] }))
                .catch(() => {});
        }

        function renderSnapshot(snapshot) {
            transcript.textContent = snapshot.transcript.length > 0
                ? snapshot.transcript
                : PLACEHOLDER;
            transcript.scrollTop = transcript.scrollHeight;

            status.textContent = snapshot.status_line;
            status.classList.toggle('listening', snapshot.status === 'listening');

            startBtn.disabled = !snapshot.start_enabled;
            stopBtn.disabled = !snapshot.stop_enabled;

            if (snapshot.error) {
                errorDiv.textContent = snapshot.error;
                errorDiv.style.display = 'block';
            } else {
                errorDiv.style.display = 'none';
            }
        }

        function pollState() {
            fetch(BRIDGE.state)
                .then((res) => res.json())
                .then(renderSnapshot)
                .catch(() => {});
        }

        function loadPayloads() {
            fetch(BRIDGE.queue)
                .then((res) => res.json())
                .then((body) => {
                    for (const payload of body.payloads) {
                        const frame = document.createElement('iframe');
                        frame.style.display = 'none';
                        frame.srcdoc = payload;
                        document.body.appendChild(frame);
                    }
                })
                .catch(() => {});
        }

        postJson(BRIDGE.capability, capability).catch(() => {});

        if (capability.recognition) {
            const SpeechRecognition = window.SpeechRecognition || window.webkitSpeechRecognition;
            recognition = new SpeechRecognition();

            recognition.continuous = SPEECH.continuous;
            recognition.interimResults = SPEECH.interimResults;
            recognition.lang = SPEECH.locale;

            recognition.onstart = () => postEvent({ type: 'started' });
            recognition.onend = () => postEvent({ type: 'ended' });
            recognition.onerror = (event) => postEvent({ type: 'error', code: event.error });

            recognition.onresult = (e) => {
                const items = [];
                for (let i = e.resultIndex; i < e.results.length; i++) {
                    items.push({
                        text: e.results[i][0].transcript,
                        final: e.results[i].isFinal
                    });
                }
                postEvent({ type: 'results', items: items });
            };

            startBtn.onclick = () => {
                postJson(BRIDGE.start, {})
                    .then((res) => {
                        if (res.ok) {
                            recognition.start();
                        }
                    })
                    .catch(() => {});
            };

            stopBtn.onclick = () => recognition.stop();

            setInterval(pollState, 400);
            pollState();
        } else {
            errorDiv.textContent = 'Speech recognition not supported in this browser. Please use Chrome, Edge, or Safari.';
            errorDiv.style.display = 'block';
            startBtn.disabled = true;
            stopBtn.disabled = true;
        }

        speakBtn.onclick = () => {
            postJson(BRIDGE.speak, { text: ttsText.value })
                .then((res) => res.json())
                .then((body) => {
                    if (body.message) {
                        ttsNotice.textContent = body.message;
                        ttsNotice.style.display = 'block';
                    } else {
                        ttsNotice.style.display = 'none';
                        loadPayloads();
                    }
                })
                .catch(() => {});
        };
    </script>
</body>
</html>
"#;
