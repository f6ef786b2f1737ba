//! Lookups over UPnP device description documents.
//!
//! A description document lists the root device's services under the first
//! `serviceList` element; embedded devices carry their own lists further down
//! inside `deviceList`. Relative control and event URLs are resolved against
//! `URLBase` when the document has one, otherwise against the location the
//! document was fetched from.

use crate::error::{DomError, Result};
use crate::node::{element_value, elements_by_tag_name, first_element};
use url::Url;
use xmltree::Element;

/// Tag of the service list element.
pub const SERVICE_LIST_TAG: &str = "serviceList";
/// Tag of a single service element.
pub const SERVICE_TAG: &str = "service";
/// Tag of the optional base URL element.
pub const URL_BASE_TAG: &str = "URLBase";

/// Services of the root device, in document order.
///
/// Returns `None` when the document has no `serviceList` at all.
pub fn first_service_list(doc: &Element) -> Option<Vec<&Element>> {
    let service_list = first_element(doc, SERVICE_LIST_TAG)?;
    Some(elements_by_tag_name(service_list, SERVICE_TAG))
}

/// Text value of the first element named `item` anywhere in the document.
pub fn first_document_item(doc: &Element, item: &str) -> Option<String> {
    first_element(doc, item).and_then(element_value)
}

/// Text value of the first element named `item` at or below `element`.
///
/// Unlike [`first_document_item`] the two failure cases are told apart, so
/// callers can report which one happened.
pub fn first_element_item(element: &Element, item: &str) -> Result<String> {
    let found = first_element(element, item)
        .ok_or_else(|| DomError::ElementNotFound(item.to_string()))?;

    element_value(found).ok_or_else(|| DomError::MissingValue(item.to_string()))
}

/// Base for relative URLs: `URLBase` if the document declares one, otherwise `location`.
pub fn base_url(doc: &Element, location: &str) -> String {
    first_document_item(doc, URL_BASE_TAG).unwrap_or_else(|| location.to_string())
}

/// Resolve `relative` against `base`. An absolute `relative` is returned as is.
pub fn resolve_url(base: &str, relative: &str) -> Result<String> {
    let url_error = || DomError::UrlResolution {
        base: base.to_string(),
        relative: relative.to_string(),
    };

    let base_url = Url::parse(base).map_err(|_| url_error())?;
    let resolved = base_url.join(relative).map_err(|_| url_error())?;
    tracing::trace!(base, relative, %resolved, "Resolved URL");
    Ok(resolved.into())
}

/// Raw fields of one `service` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub service_type: Option<String>,
    pub service_id: Option<String>,
    pub control_url: Option<String>,
    pub event_sub_url: Option<String>,
    pub scpd_url: Option<String>,
}

impl ServiceEntry {
    /// Read the service fields from a `service` element.
    pub fn from_element(service: &Element) -> Self {
        let item = |tag: &str| first_element_item(service, tag).ok();
        Self {
            service_type: item("serviceType"),
            service_id: item("serviceId"),
            control_url: item("controlURL"),
            event_sub_url: item("eventSubURL"),
            scpd_url: item("SCPDURL"),
        }
    }

    /// All services of the root device.
    pub fn root_services(doc: &Element) -> Vec<Self> {
        first_service_list(doc)
            .unwrap_or_default()
            .into_iter()
            .map(Self::from_element)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::parse_document;

    const DESCRIPTION: &str = r#"<?xml version="1.0"?>
<root xmlns="urn:schemas-upnp-org:device-1-0">
  <specVersion><major>1</major><minor>0</minor></specVersion>
  <device>
    <deviceType>urn:schemas-upnp-org:device:tvdevice:1</deviceType>
    <friendlyName>UPnP Television Emulator</friendlyName>
    <UDN>uuid:Upnp-TVEmulator-1_0-1234567890001</UDN>
    <serviceList>
      <service>
        <serviceType>urn:schemas-upnpmd:service:tvcontrol:1</serviceType>
        <serviceId>urn:upnp-org:serviceId:tvcontrol1</serviceId>
        <controlURL>/upnp/control/tvcontrol1</controlURL>
        <eventSubURL>/upnp/event/tvcontrol1</eventSubURL>
        <SCPDURL>/tvcontrolSCPD.xml</SCPDURL>
      </service>
      <service>
        <serviceType>urn:schemas-upnpmd:service:tvpicture:1</serviceType>
        <serviceId>urn:upnp-org:serviceId:tvpicture1</serviceId>
        <controlURL>/upnp/control/tvpicture1</controlURL>
        <eventSubURL>/upnp/event/tvpicture1</eventSubURL>
      </service>
    </serviceList>
    <deviceList>
      <device>
        <serviceList>
          <service>
            <serviceType>urn:schemas-upnp-org:service:Embedded:1</serviceType>
          </service>
        </serviceList>
      </device>
    </deviceList>
  </device>
</root>"#;

    #[test]
    fn test_first_service_list_only_root_device() {
        let doc = parse_document(DESCRIPTION).unwrap();
        let services = first_service_list(&doc).unwrap();
        assert_eq!(services.len(), 2);
    }

    #[test]
    fn test_first_service_list_missing() {
        let doc = parse_document("<root><device/></root>").unwrap();
        assert!(first_service_list(&doc).is_none());
    }

    #[test]
    fn test_first_service_list_empty() {
        let doc = parse_document("<root><serviceList/></root>").unwrap();
        assert_eq!(first_service_list(&doc).map(|services| services.len()), Some(0));
    }

    #[test]
    fn test_first_document_item() {
        let doc = parse_document(DESCRIPTION).unwrap();
        assert_eq!(
            first_document_item(&doc, "UDN").as_deref(),
            Some("uuid:Upnp-TVEmulator-1_0-1234567890001")
        );
        assert_eq!(
            first_document_item(&doc, "serviceType").as_deref(),
            Some("urn:schemas-upnpmd:service:tvcontrol:1")
        );
        assert_eq!(first_document_item(&doc, "presentationURL"), None);
    }

    #[test]
    fn test_first_element_item_errors() {
        let doc = parse_document("<service><serviceId/></service>").unwrap();
        assert_eq!(
            first_element_item(&doc, "serviceType"),
            Err(DomError::ElementNotFound("serviceType".to_string()))
        );
        assert_eq!(
            first_element_item(&doc, "serviceId"),
            Err(DomError::MissingValue("serviceId".to_string()))
        );
    }

    #[test]
    fn test_base_url_prefers_url_base() {
        let doc = parse_document(
            "<root><URLBase>http://10.0.0.2:49152/</URLBase><device/></root>",
        )
        .unwrap();
        assert_eq!(
            base_url(&doc, "http://10.0.0.9:80/description.xml"),
            "http://10.0.0.2:49152/"
        );

        let doc = parse_document(DESCRIPTION).unwrap();
        assert_eq!(
            base_url(&doc, "http://10.0.0.9:80/description.xml"),
            "http://10.0.0.9:80/description.xml"
        );
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://192.168.1.5:49152/tvdevicedesc.xml", "/upnp/control/tvcontrol1")
                .unwrap(),
            "http://192.168.1.5:49152/upnp/control/tvcontrol1"
        );
        assert_eq!(
            resolve_url("http://192.168.1.5:49152/desc/root.xml", "control").unwrap(),
            "http://192.168.1.5:49152/desc/control"
        );
        assert_eq!(
            resolve_url("http://192.168.1.5:49152/", "http://10.1.1.1/ctl").unwrap(),
            "http://10.1.1.1/ctl"
        );
    }

    #[test]
    fn test_resolve_url_invalid_base() {
        let result = resolve_url("not a url", "/upnp/control");
        assert!(matches!(result, Err(DomError::UrlResolution { .. })));
    }

    #[test]
    fn test_root_services() {
        let doc = parse_document(DESCRIPTION).unwrap();
        let services = ServiceEntry::root_services(&doc);

        assert_eq!(services.len(), 2);
        assert_eq!(
            services[0].service_id.as_deref(),
            Some("urn:upnp-org:serviceId:tvcontrol1")
        );
        assert_eq!(services[0].scpd_url.as_deref(), Some("/tvcontrolSCPD.xml"));
        assert_eq!(services[1].scpd_url, None);
        assert_eq!(
            services[1].event_sub_url.as_deref(),
            Some("/upnp/event/tvpicture1")
        );
    }
}
