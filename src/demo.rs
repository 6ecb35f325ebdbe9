//! Derives a demo URL from the files a PR adds, so a caller capturing a
//! screen recording knows which page to open. Capture itself happens
//! outside this crate; the pipeline only accepts a finished recording.

use crate::analysis::FileChange;
use crate::pr::types::FileStatus;

const COMPONENT_EXTENSIONS: [&str; 4] = [".tsx", ".jsx", ".ts", ".js"];

/// Maps newly added docs pages and router components to URL routes.
///
/// Added `.mdx` files under a `docs/` directory become their path with the
/// leading `content` segment and the extension stripped. Added components
/// under a `pages/` or `app/` router become their path with the router
/// prefix, extension, and trailing `/index` or `/page` stripped; private
/// (`/_`-prefixed) and `/api/` routes are dropped.
pub fn extract_new_routes(files: &[FileChange]) -> Vec<String> {
    let mut routes = Vec::new();

    for file in files {
        if file.status != FileStatus::Added {
            continue;
        }

        if file.path.contains("/docs/") && file.path.ends_with(".mdx") {
            let route = file.path.strip_prefix("content").unwrap_or(&file.path);
            let route = strip_end(route, ".mdx");
            let route = strip_end(route, "/index");
            routes.push(route.to_string());
        } else if (file.path.contains("/pages/") || file.path.contains("/app/"))
            && COMPONENT_EXTENSIONS.iter().any(|ext| file.path.ends_with(ext))
        {
            let route = file.path.strip_prefix("src/").unwrap_or(&file.path);
            let route = route
                .strip_prefix("pages")
                .or_else(|| route.strip_prefix("app"))
                .unwrap_or(route);
            let route = strip_extension(route);
            let route = strip_end(route, "/index");
            let route = strip_end(route, "/page");

            if !route.starts_with("/_") && !route.contains("/api/") {
                routes.push(route.to_string());
            }
        }
    }

    routes
}

/// Picks the route to point a demo capture at: an `overview` page if one was
/// added, otherwise the first non-meta route, otherwise the first.
pub fn build_demo_url(base_url: &str, routes: &[String]) -> String {
    let primary = routes
        .iter()
        .find(|r| r.contains("overview"))
        .or_else(|| routes.iter().find(|r| !r.contains("meta")))
        .or_else(|| routes.first());

    match primary {
        Some(route) => {
            let base = base_url.strip_suffix('/').unwrap_or(base_url);
            format!("{}{}", base, route)
        }
        None => base_url.to_string(),
    }
}

fn strip_end<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

fn strip_extension(path: &str) -> &str {
    for ext in COMPONENT_EXTENSIONS {
        if let Some(stripped) = path.strip_suffix(ext) {
            return stripped;
        }
    }
    path
}
