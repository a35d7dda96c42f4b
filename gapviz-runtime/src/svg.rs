/// Minimal SVG markup writer.
///
/// Marks are emitted as lines of markup into an owned buffer; nothing here
/// can fail, so the renderers stay free of formatting error plumbing.
#[derive(Debug, Default, Clone)]
pub struct SvgFragment {
    buf: String,
}

impl SvgFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
        self.buf.push('\n');
    }

    pub fn open_group(&mut self, attrs: &str) {
        self.raw(&format!("<g {attrs}>"));
    }

    pub fn close_group(&mut self) {
        self.raw("</g>");
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, attrs: &str) {
        self.raw(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {attrs}/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, attrs: &str) {
        self.raw(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" {attrs}/>"#,
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(r)
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, attrs: &str) {
        self.raw(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" {attrs}/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
    }

    pub fn path(&mut self, d: &str, attrs: &str) {
        self.raw(&format!(r#"<path d="{d}" {attrs}/>"#));
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, attrs: &str) {
        self.raw(&format!(
            r#"<text x="{}" y="{}" {attrs}>{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            escape_text(content)
        ));
    }

    pub fn text_transformed(&mut self, transform: &str, content: &str, attrs: &str) {
        self.raw(&format!(
            r#"<text transform="{transform}" {attrs}>{}</text>"#,
            escape_text(content)
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Format a coordinate or tick value without trailing noise: whole numbers
/// print as integers, everything else with at most two decimals.
pub fn fmt_num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
