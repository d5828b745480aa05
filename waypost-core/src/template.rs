use std::fmt;

use tracing::trace;

use crate::{Result, RouteError, RouteParams};

/// A path such as `/users/:id/files/:path*/:rev?`, split once into literal
/// text and placeholders.
///
/// A placeholder is an optional leading `/`, a `:`, one or more ASCII word
/// characters and up to two flags: `?` (optional) and `*` (greedy). Flag order
/// does not matter, so `:path*?` and `:path?*` are the same placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(Param),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub leading_slash: bool,
    pub optional: bool,
    pub greedy: bool,
}

const MAX_FLAGS: usize = 2;

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl PathTemplate {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let leading_slash = bytes[i] == b'/';
            let colon = if leading_slash { i + 1 } else { i };
            if bytes.get(colon) != Some(&b':') {
                i += 1;
                continue;
            }

            let key_start = colon + 1;
            let key_end = key_start
                + bytes[key_start..]
                    .iter()
                    .take_while(|b| is_word(**b))
                    .count();
            if key_end == key_start {
                // a bare ':' is plain text
                i += 1;
                continue;
            }

            let flags_end = key_end
                + bytes[key_end..]
                    .iter()
                    .take(MAX_FLAGS)
                    .take_while(|b| matches!(**b, b'?' | b'*'))
                    .count();
            let flags = &bytes[key_end..flags_end];

            if literal_start < i {
                segments.push(Segment::Literal(source[literal_start..i].to_string()));
            }
            segments.push(Segment::Param(Param {
                key: source[key_start..key_end].to_string(),
                leading_slash,
                optional: flags.contains(&b'?'),
                greedy: flags.contains(&b'*'),
            }));

            i = flags_end;
            literal_start = flags_end;
        }

        if literal_start < bytes.len() {
            segments.push(Segment::Literal(source[literal_start..].to_string()));
        }

        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(param) => Some(param),
            Segment::Literal(_) => None,
        })
    }

    /// Placeholder keys in the order they appear.
    pub fn keys(&self) -> Vec<&str> {
        self.params().map(|param| param.key.as_str()).collect()
    }

    pub fn required_keys(&self) -> Vec<&str> {
        self.params()
            .filter(|param| !param.optional)
            .map(|param| param.key.as_str())
            .collect()
    }

    /// Substitutes every placeholder in a single pass.
    ///
    /// A required placeholder must have its key present in `params`. An
    /// optional placeholder with no value or an empty value is dropped along
    /// with its leading `/`. Values are inserted verbatim, without escaping.
    pub fn render<P>(&self, route: &str, params: &P) -> Result<String>
    where
        P: RouteParams + ?Sized,
    {
        let mut url = String::with_capacity(self.source.len());

        for segment in &self.segments {
            let param = match segment {
                Segment::Literal(text) => {
                    url.push_str(text);
                    continue;
                }
                Segment::Param(param) => param,
            };

            match params.get_param(&param.key) {
                None if !param.optional => {
                    return Err(RouteError::MissingParameter {
                        key: param.key.clone(),
                        route: route.to_string(),
                    });
                }
                Some(value) if !(param.optional && value.is_empty()) => {
                    if param.leading_slash {
                        url.push('/');
                    }
                    url.push_str(value);
                }
                _ => trace!(route, key = %param.key, "optional parameter omitted"),
            }
        }

        Ok(url)
    }
}

impl From<&str> for PathTemplate {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn param(key: &str, leading_slash: bool, optional: bool, greedy: bool) -> Segment {
        Segment::Param(Param {
            key: key.to_string(),
            leading_slash,
            optional,
            greedy,
        })
    }

    fn literal(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn parse_literal_only_should_work() {
        let template = PathTemplate::parse("/bar");
        assert_eq!(template.segments(), &[literal("/bar")]);
        assert!(template.keys().is_empty());
    }

    #[test]
    fn parse_flags_should_work() {
        let template = PathTemplate::parse("/qux/:a/:b?/:c*/:d*?/:e?*");
        assert_eq!(
            template.segments(),
            &[
                literal("/qux"),
                param("a", true, false, false),
                param("b", true, true, false),
                param("c", true, false, true),
                param("d", true, true, true),
                param("e", true, true, true),
            ]
        );
        assert_eq!(template.keys(), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(template.required_keys(), vec!["a", "c"]);
    }

    #[test]
    fn parse_should_stop_flags_after_two() {
        let template = PathTemplate::parse("/:a?*?");
        assert_eq!(
            template.segments(),
            &[param("a", true, true, true), literal("?")]
        );
    }

    #[test]
    fn parse_without_leading_slash_should_work() {
        let template = PathTemplate::parse("/files/v:rev.:ext");
        assert_eq!(
            template.segments(),
            &[
                literal("/files/v"),
                param("rev", false, false, false),
                literal("."),
                param("ext", false, false, false),
            ]
        );
    }

    #[test]
    fn parse_bare_colon_should_be_literal() {
        let template = PathTemplate::parse("/a/:/b:-c/");
        assert_eq!(template.segments(), &[literal("/a/:/b:-c/")]);
    }

    #[test]
    fn render_should_substitute_values() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/qux/:quux");
        let url = template.render("bar", &[("quux", "corge")])?;
        assert_eq!(url, "/qux/corge");
        Ok(())
    }

    #[test]
    fn render_should_fail_on_missing_required() {
        let template = PathTemplate::parse("/qux/:quux");
        let err = template.render("bar", &()).unwrap_err();
        assert!(matches!(
            err,
            RouteError::MissingParameter { ref key, ref route } if key == "quux" && route == "bar"
        ));
    }

    #[test]
    fn render_should_drop_missing_optional() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/qux/:quux?/quuux");
        assert_eq!(template.render("baz", &())?, "/qux/quuux");
        assert_eq!(template.render("baz", &[("quux", "")])?, "/qux/quuux");
        assert_eq!(template.render("baz", &[("quux", "corge")])?, "/qux/corge/quuux");
        Ok(())
    }

    #[test]
    fn render_should_drop_optional_greedy_in_any_flag_order() -> anyhow::Result<()> {
        for path in ["/qux/:quux*?/quuux", "/qux/:quux?*/quuux"] {
            let template = PathTemplate::parse(path);
            assert_eq!(template.render("qux", &())?, "/qux/quuux");
            assert_eq!(
                template.render("qux", &[("quux", "a/b")])?,
                "/qux/a/b/quuux"
            );
        }
        Ok(())
    }

    #[test]
    fn render_greedy_should_keep_slashes() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/qux/:quux*/quuux");
        assert_eq!(template.render("qux", &[("quux", "corge")])?, "/qux/corge/quuux");
        assert_eq!(
            template.render("qux", &[("quux", "corge/fox")])?,
            "/qux/corge/fox/quuux"
        );
        Ok(())
    }

    #[test]
    fn render_should_keep_empty_required_value() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/qux/:quux");
        assert_eq!(template.render("bar", &[("quux", "")])?, "/qux/");
        Ok(())
    }

    #[test]
    fn render_should_not_encode_values() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/search/:q");
        let params = HashMap::from([("q", "a b?c=d")]);
        assert_eq!(template.render("search", &params)?, "/search/a b?c=d");
        Ok(())
    }

    #[test]
    fn render_should_not_rescan_substituted_values() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/:a/:b");
        let url = template.render("pair", &[("a", ":b"), ("b", "x")])?;
        assert_eq!(url, "/:b/x");
        Ok(())
    }

    #[test]
    fn render_optional_without_slash_should_drop_token() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/report.:format?");
        assert_eq!(template.render("report", &())?, "/report.");
        assert_eq!(template.render("report", &[("format", "csv")])?, "/report.csv");
        Ok(())
    }

    #[test]
    fn render_all_required_should_leave_no_placeholders() -> anyhow::Result<()> {
        let template = PathTemplate::parse("/users/:user_id/posts/:post_id/:slug*");
        let params = [("user_id", "7"), ("post_id", "12"), ("slug", "a/b")];
        let url = template.render("post", &params)?;
        assert_eq!(url, "/users/7/posts/12/a/b");
        assert!(PathTemplate::parse(url.as_str()).keys().is_empty());
        Ok(())
    }

    #[test]
    fn display_should_return_source() {
        let template: PathTemplate = "/qux/:quux?".into();
        assert_eq!(template.to_string(), "/qux/:quux?");
        assert_eq!(template.as_str(), "/qux/:quux?");
    }
}
