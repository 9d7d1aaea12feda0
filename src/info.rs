// gldispatch/src/info.rs
//
//! OpenGL information.

use std::fmt::{self, Display, Formatter};

/// The API (OpenGL, OpenGL ES 1.x or OpenGL ES 2.0 and later).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GLApi {
    GL,
    GLES1,
    GLES2,
}

impl GLApi {
    /// The lowest version a context of this API can report.
    #[inline]
    pub fn baseline_version(self) -> GLVersion {
        match self {
            GLApi::GL | GLApi::GLES1 => GLVersion::new(1, 0),
            GLApi::GLES2 => GLVersion::new(2, 0),
        }
    }

    #[inline]
    pub fn is_gles(self) -> bool {
        self != GLApi::GL
    }
}

/// An OpenGL or OpenGL ES version. Ordered by major, then minor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub const fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// The version as the single integer `major * 10 + minor`, e.g. 33 for 3.3.
    #[inline]
    pub fn to_number(self) -> u32 {
        self.major as u32 * 10 + self.minor as u32
    }

    /// Parses a `GL_VERSION` string for the given API.
    ///
    /// Desktop strings start with the version (`"4.6.0 NVIDIA 550.54"`). OpenGL ES strings
    /// carry a prefix (`"OpenGL ES 3.2 Mesa 24.0"`, `"OpenGL ES-CM 1.1"`). A string that names
    /// the wrong API yields `None`.
    pub fn parse(api: GLApi, version_string: &str) -> Option<GLVersion> {
        const ES_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

        let es_suffix = ES_PREFIXES
            .iter()
            .find_map(|prefix| version_string.strip_prefix(prefix));
        let numbers = match (api.is_gles(), es_suffix) {
            (true, Some(rest)) => rest,
            (false, None) => version_string,
            _ => return None,
        };

        let mut parts = numbers.splitn(2, '.');
        let major = parse_leading_number(parts.next()?)?;
        let minor = parse_leading_number(parts.next()?)?;
        let version = GLVersion::new(major, minor);

        // ES 1.x strings come from GLES1 contexts only, and vice versa.
        let es1 = major == 1;
        match api {
            GLApi::GLES1 if !es1 => None,
            GLApi::GLES2 if es1 => None,
            _ => Some(version),
        }
    }
}

impl Display for GLVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn parse_leading_number(string: &str) -> Option<u8> {
    let end = string
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(string.len());
    string[..end].parse().ok()
}
