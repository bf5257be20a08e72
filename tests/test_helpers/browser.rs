//! In-process HTML client for the router.
//!
//! Follows redirects, clicks links by their text and submits forms the way
//! a browser would: hidden and pre-filled fields are sent along with the
//! values typed into labelled inputs.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use eyre::{Result, WrapErr, bail, eyre};
use std::collections::BTreeMap;
use tower::ServiceExt as _;

const MAX_REDIRECTS: usize = 5;
const BODY_LIMIT: usize = 1 << 20;

/// Headless browser session bound to a router.
pub struct Browser {
    router: Router,
    current_url: String,
    status: StatusCode,
    html: String,
    filled: BTreeMap<String, String>,
}

struct RawResponse {
    status: StatusCode,
    location: Option<String>,
    html: String,
}

impl Browser {
    /// Starts a session with an empty page.
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            router,
            current_url: String::new(),
            status: StatusCode::OK,
            html: String::new(),
            filled: BTreeMap::new(),
        }
    }

    /// Loads a page.
    pub async fn visit(&mut self, path: &str) -> Result<()> {
        self.navigate(Method::GET, path, None).await
    }

    /// Sends a request with an optional form body and follows redirects.
    pub async fn navigate(
        &mut self,
        method: Method,
        path: &str,
        form: Option<String>,
    ) -> Result<()> {
        let mut response = self.send(method, path, form).await?;
        let mut url = path.to_owned();
        for _ in 0..MAX_REDIRECTS {
            if !response.status.is_redirection() {
                break;
            }
            let target = response
                .location
                .ok_or_else(|| eyre!("redirect from {url} has no location"))?;
            response = self.send(Method::GET, &target, None).await?;
            url = target;
        }
        self.current_url = url;
        self.status = response.status;
        self.html = response.html;
        self.filled.clear();
        Ok(())
    }

    async fn send(&self, method: Method, uri: &str, form: Option<String>) -> Result<RawResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(encoded) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(encoded)
            }
            None => Body::empty(),
        };
        let request = builder.body(body).wrap_err("build request")?;
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body(), BODY_LIMIT)
            .await
            .wrap_err("read response body")?;
        let html = String::from_utf8(bytes.to_vec()).wrap_err("response is not UTF-8")?;
        Ok(RawResponse {
            status,
            location,
            html,
        })
    }

    /// Path of the current page without its query string.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.current_url
            .split_once('?')
            .map_or(self.current_url.as_str(), |(path, _)| path)
    }

    /// Status of the last page load.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw markup of the current page.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whether the visible text of the page contains `text`.
    ///
    /// Markup and attribute values are ignored and whitespace runs collapse
    /// to a single space.
    #[must_use]
    pub fn has_content(&self, text: &str) -> bool {
        visible_text(&self.html).contains(text)
    }

    /// Visible text of the element carrying `class`.
    pub fn within_class(&self, class: &str) -> Result<String> {
        let marker = format!(r#"class="{class}""#);
        let (before, after) = self
            .html
            .split_once(&marker)
            .ok_or_else(|| eyre!("no element with class {class} on {}", self.current_url))?;
        let tag = before
            .rsplit_once('<')
            .and_then(|(_, open)| open.split_whitespace().next())
            .ok_or_else(|| eyre!("malformed element with class {class}"))?;
        let (inner, _) = after
            .split_once(&format!("</{tag}>"))
            .ok_or_else(|| eyre!("unclosed <{tag}> with class {class}"))?;
        Ok(visible_text(inner))
    }

    /// Follows the first link whose text is `text`.
    pub async fn click_link(&mut self, text: &str) -> Result<()> {
        let href = find_link(&self.html, text)
            .ok_or_else(|| eyre!("no link '{text}' on {}", self.current_url))?;
        self.visit(&href).await
    }

    /// Follows the link `text` inside the element with id `element_id`.
    pub async fn click_link_in(&mut self, element_id: &str, text: &str) -> Result<()> {
        let marker = format!(r#"id="{element_id}""#);
        let (_, scoped) = self
            .html
            .split_once(&marker)
            .ok_or_else(|| eyre!("no element {element_id} on {}", self.current_url))?;
        let href = find_link(scoped, text)
            .ok_or_else(|| eyre!("no link '{text}' inside {element_id}"))?;
        self.visit(&href).await
    }

    /// Types `value` into the input labelled `label`.
    pub fn fill_in(&mut self, label: &str, value: &str) -> Result<()> {
        let name = self.field_name(label)?;
        self.filled.insert(name, value.to_owned());
        Ok(())
    }

    /// Chooses `option` in the select labelled `label`.
    pub fn select(&mut self, option: &str, label: &str) -> Result<()> {
        if !self.html.contains(&format!(r#"<option value="{option}""#)) {
            bail!("no option '{option}' on {}", self.current_url);
        }
        self.fill_in(label, option)
    }

    fn field_name(&self, label: &str) -> Result<String> {
        let id = self
            .html
            .split("<label ")
            .skip(1)
            .find_map(|chunk| {
                let (attrs, rest) = chunk.split_once('>')?;
                let (text, _) = rest.split_once("</label>")?;
                (decode(text.trim()) == label).then(|| attr(attrs, "for"))?
            })
            .ok_or_else(|| eyre!("no label '{label}' on {}", self.current_url))?;
        let marker = format!(r#"id="{id}""#);
        let (before, after) = self
            .html
            .split_once(&marker)
            .ok_or_else(|| eyre!("label '{label}' points at missing element {id}"))?;
        let open = before.rsplit_once('<').map_or("", |(_, open)| open);
        let close = after.split_once('>').map_or("", |(close, _)| close);
        attr(&format!("{open} {close}"), "name")
            .ok_or_else(|| eyre!("element {id} has no name"))
    }

    /// Submits the form holding the button labelled `label`.
    pub async fn click_button(&mut self, label: &str) -> Result<()> {
        let form = self
            .html
            .split("<form")
            .skip(1)
            .filter_map(|chunk| chunk.split_once("</form>").map(|(form, _)| form))
            .find(|form| submit_pressed(form, label).is_some())
            .ok_or_else(|| eyre!("no button '{label}' on {}", self.current_url))?;
        let (open, body) = form
            .split_once('>')
            .ok_or_else(|| eyre!("malformed form"))?;
        let action = attr(open, "action").unwrap_or_else(|| self.current_url.clone());

        let mut fields = default_fields(body);
        if let Some((name, value)) = submit_pressed(body, label) {
            if !name.is_empty() {
                fields.push((name, value));
            }
        }
        for (name, value) in &self.filled {
            match fields.iter_mut().find(|(field, _)| field == name) {
                Some(entry) => entry.1.clone_from(value),
                None => fields.push((name.clone(), value.clone())),
            }
        }
        let encoded = serde_urlencoded::to_string(&fields).wrap_err("encode form")?;
        self.navigate(Method::POST, &action, Some(encoded)).await
    }
}

fn attr(tag: &str, name: &str) -> Option<String> {
    let padded = format!(" {tag}");
    let marker = format!(r#" {name}=""#);
    let (_, rest) = padded.split_once(&marker)?;
    let (value, _) = rest.split_once('"')?;
    Some(decode(value))
}

fn find_link(html: &str, text: &str) -> Option<String> {
    html.split("<a ").skip(1).find_map(|chunk| {
        let (attrs, rest) = chunk.split_once('>')?;
        let (label, _) = rest.split_once("</a>")?;
        (decode(label.trim()) == text).then(|| attr(attrs, "href"))?
    })
}

/// Name and value of the submit control labelled `label`, if the form has
/// one. The name is empty for unnamed controls.
fn submit_pressed(form: &str, label: &str) -> Option<(String, String)> {
    let input = form.split("<input ").skip(1).find_map(|chunk| {
        let (attrs, _) = chunk.split_once('>')?;
        let is_submit = attr(attrs, "type").as_deref() == Some("submit");
        (is_submit && attr(attrs, "value").as_deref() == Some(label)).then(|| {
            (
                attr(attrs, "name").unwrap_or_default(),
                attr(attrs, "value").unwrap_or_default(),
            )
        })
    });
    let button = || {
        form.split("<button ").skip(1).find_map(|chunk| {
            let (attrs, rest) = chunk.split_once('>')?;
            let (text, _) = rest.split_once("</button>")?;
            (decode(text.trim()) == label).then(|| {
                (
                    attr(attrs, "name").unwrap_or_default(),
                    attr(attrs, "value").unwrap_or_default(),
                )
            })
        })
    };
    input.or_else(button)
}

/// Values a browser sends without user input: named non-submit inputs and
/// the selected option of each select.
fn default_fields(form: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = form
        .split("<input ")
        .skip(1)
        .filter_map(|chunk| {
            let (attrs, _) = chunk.split_once('>')?;
            if attr(attrs, "type").as_deref() == Some("submit") {
                return None;
            }
            Some((attr(attrs, "name")?, attr(attrs, "value").unwrap_or_default()))
        })
        .collect();

    for chunk in form.split("<select ").skip(1) {
        let Some((attrs, rest)) = chunk.split_once('>') else {
            continue;
        };
        let Some(name) = attr(attrs, "name") else {
            continue;
        };
        let options = rest.split_once("</select>").map_or(rest, |(options, _)| options);
        let all: Vec<(String, bool)> = options
            .split("<option ")
            .skip(1)
            .filter_map(|option| {
                let (option_attrs, _) = option.split_once('>')?;
                Some((
                    attr(option_attrs, "value").unwrap_or_default(),
                    option_attrs.contains(" selected"),
                ))
            })
            .collect();
        let chosen = all
            .iter()
            .find(|(_, selected)| *selected)
            .or_else(|| all.first())
            .map(|(value, _)| value.clone())
            .unwrap_or_default();
        fields.push((name, chosen));
    }
    fields
}

/// Strips tags from `markup`, decodes entities and collapses whitespace.
#[must_use]
pub fn visible_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    decode(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes the entities produced by the HTML escaper.
#[must_use]
pub fn decode(text: &str) -> String {
    text.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
