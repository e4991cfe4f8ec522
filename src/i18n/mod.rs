//! Internationalization (i18n) support
//!
//! Fans static detail-page paths out across the site's locales so that
//! every `(id, locale)` pair is pre-rendered.

use serde::Serialize;

/// Route parameters of one detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParams {
    pub id: String,
}

/// One static path, optionally bound to a locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPath {
    pub params: PathParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// The full set of paths to pre-render.
///
/// `fallback` is always `false`: a request outside `paths` is a not-found,
/// never a page generated on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<StaticPath>,
    pub fallback: bool,
}

/// Expand `params` across `locales`, path-major and locale-minor.
///
/// Without locales (absent or empty) the paths pass through unchanged.
pub fn expand_locales<S: AsRef<str>>(
    params: Vec<PathParams>,
    locales: Option<&[S]>,
) -> StaticPaths {
    let paths = match locales {
        Some(locales) if !locales.is_empty() => params
            .iter()
            .flat_map(move |params| {
                locales.iter().map(move |locale| StaticPath {
                    params: params.clone(),
                    locale: Some(locale.as_ref().to_string()),
                })
            })
            .collect(),
        _ => params
            .into_iter()
            .map(|params| StaticPath {
                params,
                locale: None,
            })
            .collect(),
    };

    StaticPaths {
        paths,
        fallback: false,
    }
}
