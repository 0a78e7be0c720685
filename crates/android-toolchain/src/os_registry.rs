//! OS registry access
//!
//! Only Windows has a registry worth asking. Everything else gets
//! [`NoRegistry`], picked at compile time by [`default_registry`].

/// Registry root a key lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryHive {
    CurrentUser,
    LocalMachine,
}

impl std::fmt::Display for RegistryHive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryHive::CurrentUser => f.write_str("HKEY_CURRENT_USER"),
            RegistryHive::LocalMachine => f.write_str("HKEY_LOCAL_MACHINE"),
        }
    }
}

/// Read-only string lookups in the OS registry.
///
/// Any failure (absent key, access denied, wrong type) is `None`.
pub trait RegistryReader: Send + Sync {
    fn read_string(&self, hive: RegistryHive, key: &str, value: &str) -> Option<String>;
}

/// Registry reader for hosts without a registry
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistry;

impl RegistryReader for NoRegistry {
    fn read_string(&self, _hive: RegistryHive, _key: &str, _value: &str) -> Option<String> {
        None
    }
}

/// The registry reader for this platform
pub fn default_registry() -> Box<dyn RegistryReader> {
    #[cfg(windows)]
    {
        Box::new(windows::WindowsRegistry)
    }
    #[cfg(not(windows))]
    {
        Box::new(NoRegistry)
    }
}

#[cfg(windows)]
pub use windows::WindowsRegistry;

#[cfg(windows)]
mod windows {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use std::ptr;
    use tracing::debug;
    use windows_sys::Win32::Foundation::ERROR_SUCCESS;
    use windows_sys::Win32::System::Registry::{
        RegGetValueW, HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ,
    };

    use super::{RegistryHive, RegistryReader};

    /// Registry reader backed by `RegGetValueW`; no key handle outlives a call
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowsRegistry;

    fn wide(s: &str) -> Vec<u16> {
        OsStr::new(s).encode_wide().chain(std::iter::once(0)).collect()
    }

    impl RegistryReader for WindowsRegistry {
        fn read_string(&self, hive: RegistryHive, key: &str, value: &str) -> Option<String> {
            let root: HKEY = match hive {
                RegistryHive::CurrentUser => HKEY_CURRENT_USER,
                RegistryHive::LocalMachine => HKEY_LOCAL_MACHINE,
            };
            let key_w = wide(key);
            let value_w = wide(value);

            let mut size: u32 = 0;
            // SAFETY: both names are NUL-terminated and outlive the call; a null
            // data pointer asks for the required size only.
            let status = unsafe {
                RegGetValueW(
                    root,
                    key_w.as_ptr(),
                    value_w.as_ptr(),
                    RRF_RT_REG_SZ,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    &mut size,
                )
            };
            if status != ERROR_SUCCESS || size == 0 {
                debug!("Registry value {}\\{}\\{} not readable ({})", hive, key, value, status);
                return None;
            }

            let mut buf = vec![0u16; (size as usize + 1) / 2];
            // SAFETY: `buf` holds at least `size` bytes.
            let status = unsafe {
                RegGetValueW(
                    root,
                    key_w.as_ptr(),
                    value_w.as_ptr(),
                    RRF_RT_REG_SZ,
                    ptr::null_mut(),
                    buf.as_mut_ptr().cast(),
                    &mut size,
                )
            };
            if status != ERROR_SUCCESS {
                return None;
            }

            let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
            Some(String::from_utf16_lossy(&buf[..len]))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory registry for locator tests
    #[derive(Debug, Default)]
    pub(crate) struct MemoryRegistry {
        values: HashMap<(RegistryHive, String, String), String>,
    }

    impl MemoryRegistry {
        pub(crate) fn with(mut self, hive: RegistryHive, key: &str, value: &str, data: &str) -> Self {
            self.values
                .insert((hive, key.to_string(), value.to_string()), data.to_string());
            self
        }
    }

    impl RegistryReader for MemoryRegistry {
        fn read_string(&self, hive: RegistryHive, key: &str, value: &str) -> Option<String> {
            self.values
                .get(&(hive, key.to_string(), value.to_string()))
                .cloned()
        }
    }

    #[test]
    fn test_no_registry_reads_nothing() {
        assert_eq!(
            NoRegistry.read_string(RegistryHive::LocalMachine, "Software\\Android SDK Tools", "Path"),
            None
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_default_registry_is_disabled_off_windows() {
        let registry = default_registry();
        assert_eq!(
            registry.read_string(RegistryHive::CurrentUser, "Software\\Novell\\Mono for Android", "AndroidSdkDirectory"),
            None
        );
    }

    #[test]
    fn test_hive_names() {
        assert_eq!(RegistryHive::CurrentUser.to_string(), "HKEY_CURRENT_USER");
        assert_eq!(RegistryHive::LocalMachine.to_string(), "HKEY_LOCAL_MACHINE");
    }
}
