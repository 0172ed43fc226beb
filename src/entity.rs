use std::borrow::Cow;

fn serialize_entities(content: &str, escaped: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !content.chars().any(|c| escaped(c).is_some()) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len());
    for c in content.chars() {
        match escaped(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

pub(crate) fn serialize_text(content: &str) -> Cow<'_, str> {
    serialize_entities(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

pub(crate) fn serialize_attribute(content: &str) -> Cow<'_, str> {
    serialize_entities(content, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '"' => Some("&quot;"),
        _ => None,
    })
}
