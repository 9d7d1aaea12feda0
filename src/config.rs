// gldispatch/src/config.rs
//
//! Loader configuration: which platform backend resolves functions, and which shared
//! libraries it opens.

use crate::error::Error;
use crate::info::GLApi;

use std::env;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Selects the backend adapter. Overrides the target's default.
pub const PLATFORM_VAR: &str = "GLDISPATCH_PLATFORM";
/// Overrides the desktop GL library.
pub const GL_LIBRARY_VAR: &str = "GLDISPATCH_GL_LIBRARY";
/// Overrides the OpenGL ES 1.x library.
pub const GLES1_LIBRARY_VAR: &str = "GLDISPATCH_GLES1_LIBRARY";
/// Overrides the OpenGL ES 2.0+ library.
pub const GLES2_LIBRARY_VAR: &str = "GLDISPATCH_GLES2_LIBRARY";

/// The window-system facility that resolves function addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// `glXGetProcAddress` (X11, desktop GL).
    Glx,
    /// Direct symbol lookup in the GLES libraries plus `eglGetProcAddress`.
    Egl,
    /// `wglGetProcAddress` plus `opengl32.dll` exports.
    Wgl,
    /// Symbol lookup in the OpenGL framework.
    Cgl,
    /// `OSMesaGetProcAddress`.
    OSMesa,
}

impl Platform {
    /// The platform this target resolves through when nothing else is configured.
    pub fn default_for_target() -> Platform {
        if cfg!(osmesa) {
            Platform::OSMesa
        } else if cfg!(windows) {
            Platform::Wgl
        } else if cfg!(macos) {
            Platform::Cgl
        } else if cfg!(android) {
            Platform::Egl
        } else {
            Platform::Glx
        }
    }

    /// The platform to use for `api` when nothing is configured.
    ///
    /// GLX has no reliable route to the ES libraries, so ES contexts on X11 go through EGL.
    pub fn default_for_api(api: GLApi) -> Platform {
        match (Platform::default_for_target(), api.is_gles()) {
            (Platform::Glx, true) => Platform::Egl,
            (platform, _) => platform,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Platform::Glx => "glx",
            Platform::Egl => "egl",
            Platform::Wgl => "wgl",
            Platform::Cgl => "cgl",
            Platform::OSMesa => "osmesa",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(string: &str) -> Result<Platform, Error> {
        match &*string.trim().to_ascii_lowercase() {
            "glx" => Ok(Platform::Glx),
            "egl" | "x11_egl" | "wayland" | "surfaceless_egl" | "gbm" => Ok(Platform::Egl),
            "wgl" => Ok(Platform::Wgl),
            "cgl" => Ok(Platform::Cgl),
            "osmesa" => Ok(Platform::OSMesa),
            _ => Err(Error::UnknownPlatform(string.to_owned())),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the platform adapters need to know before they open libraries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// `None` picks [`Platform::default_for_api`].
    pub platform: Option<Platform>,
    pub gl_library: Option<PathBuf>,
    pub gles1_library: Option<PathBuf>,
    pub gles2_library: Option<PathBuf>,
}

impl LoaderConfig {
    /// Reads the configuration from the `GLDISPATCH_*` environment variables.
    pub fn from_env() -> Result<LoaderConfig, Error> {
        LoaderConfig::from_lookup(|name| env::var_os(name))
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<LoaderConfig, Error>
                                 where F: Fn(&str) -> Option<OsString> {
        let platform = match lookup(PLATFORM_VAR) {
            None => None,
            Some(name) => Some(name.to_string_lossy().parse()?),
        };
        let path = |name| lookup(name).filter(|value| !value.is_empty()).map(PathBuf::from);
        let config = LoaderConfig {
            platform,
            gl_library: path(GL_LIBRARY_VAR),
            gles1_library: path(GLES1_LIBRARY_VAR),
            gles2_library: path(GLES2_LIBRARY_VAR),
        };
        debug!("loader configuration: {:?}", config);
        Ok(config)
    }

    /// The platform to resolve `api` through.
    #[inline]
    pub fn platform_for(&self, api: GLApi) -> Platform {
        self.platform.unwrap_or_else(|| Platform::default_for_api(api))
    }

    /// The library override that applies to `api`, if any.
    pub fn library_for(&self, api: GLApi) -> Option<&PathBuf> {
        match api {
            GLApi::GL => self.gl_library.as_ref(),
            GLApi::GLES1 => self.gles1_library.as_ref(),
            GLApi::GLES2 => self.gles2_library.as_ref(),
        }
    }
}
