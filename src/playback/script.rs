use crate::speech::Utterance;

/// Escape double quotes so the text cannot terminate the quoted literal in
/// the generated payload early. This is the only input sanitization in the
/// system and the contract the payload depends on.
pub fn escape_double_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Render one utterance into a self-contained playback document.
///
/// The page loads the payload into a hidden frame, where the script hands
/// the utterance to the browser's synthesis queue.
pub fn synthesis_script(utterance: &Utterance) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
<script>
    if ('speechSynthesis' in window) {{
        const utterance = new SpeechSynthesisUtterance("{text}");
        utterance.lang = '{lang}';
        window.speechSynthesis.speak(utterance);
    }} else {{
        alert('Text-to-speech not supported in this browser.');
    }}
</script>
</body>
</html>
"#,
        text = escape_double_quotes(&utterance.text),
        lang = utterance.lang
    )
}
