use reelshelf_config::{Config, DEFAULT_CORS_PROXY, DEFAULT_IMAGE_BASE_URL, DEFAULT_PLACEHOLDER};

/// Turns catalog image paths into displayable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    proxy: String,
    image_base: String,
    placeholder: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CORS_PROXY, DEFAULT_IMAGE_BASE_URL, DEFAULT_PLACEHOLDER)
    }
}

impl AssetResolver {
    pub fn new(proxy: impl Into<String>, image_base: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            proxy: proxy.into(),
            image_base: image_base.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Images go through the CORS proxy only when catalog requests do.
    pub fn from_config(config: &Config) -> Self {
        let proxy = if config.api.use_proxy {
            config.api.cors_proxy.clone()
        } else {
            String::new()
        };
        Self::new(proxy, config.images.base_url.clone(), config.images.placeholder.clone())
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// - no path: the placeholder
    /// - absolute (`http...`): proxied as-is
    /// - relative: proxied, under the image base at `size`
    pub fn resolve(&self, path: Option<&str>, size: &str) -> String {
        let path = match path.map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => return self.placeholder.clone(),
        };

        if path.starts_with("http") {
            return format!("{}{}", self.proxy, path);
        }

        let base = self.image_base.trim_end_matches('/');
        let size = size.trim_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}{}/{}/{}", self.proxy, base, size, path)
    }
}

pub fn resolve_asset_url(path: Option<&str>, size: &str) -> String {
    AssetResolver::default().resolve(path, size)
}
