//! Xamarin/Mono vendor config
//!
//! `monodroid-config.xml` records the SDK and JDK an IDE was set up with:
//!
//! ```xml
//! <monodroid>
//!   <android-sdk path="/Users/dev/Library/Developer/Xamarin/android-sdk-macosx" />
//!   <java-sdk path="/Library/Java/JavaVirtualMachines/jdk1.8.0.jdk/Contents/Home" />
//! </monodroid>
//! ```

use std::path::Path;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

/// Element holding the Android SDK location
pub const ANDROID_SDK_ELEMENT: &str = "android-sdk";
/// Element holding the JDK location
pub const JAVA_SDK_ELEMENT: &str = "java-sdk";
/// Attribute both elements store the location in
pub const PATH_ATTRIBUTE: &str = "path";

/// Read `attribute` from the first `element` in the file.
///
/// A missing file, element or attribute is `None`, and so is malformed XML.
pub fn read_attribute(file: &Path, element: &str, attribute: &str) -> Option<String> {
    let content = std::fs::read_to_string(file).ok()?;
    let value = attribute_from_str(&content, element, attribute);

    if value.is_some() {
        debug!("Read <{} {}> from {:?}", element, attribute, file);
    }
    value
}

fn attribute_from_str(xml: &str, element: &str, attribute: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == element.as_bytes() => {
                let attr = e.try_get_attribute(attribute).ok().flatten()?;
                return attr.unescape_value().ok().map(|v| v.into_owned());
            }
            Ok(Event::Eof) => return None,
            Err(e) => {
                warn!("Ignoring malformed vendor config: {}", e);
                return None;
            }
            _ => {}
        }
    }
}
