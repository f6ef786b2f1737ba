//! Service lookup in device description documents, reporting through the print sink.

use tracing::{debug, warn};
use upnp_dom::{base_url, first_service_list, parse_document, resolve_url, DomError, Element};

use crate::context::SampleUtil;
use crate::error::Result;

/// Where to reach one service of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub service_id: Option<String>,
    /// Absolute URL for SOAP actions, if it could be resolved
    pub control_url: Option<String>,
    /// Absolute URL for GENA subscriptions, if it could be resolved
    pub event_url: Option<String>,
}

impl SampleUtil {
    /// Text value of the first element named `item` within `element`.
    ///
    /// A missing element or value is reported through the print sink.
    pub fn first_element_item(&self, element: &Element, item: &str) -> Option<String> {
        match upnp_dom::first_element_item(element, item) {
            Ok(value) => Some(value),
            Err(DomError::MissingValue(_)) => {
                self.print(format_args!("Error finding {} value in XML Node\n", item));
                None
            }
            Err(e) => {
                debug!("{}", e);
                self.print(format_args!("Error finding {} in XML Node\n", item));
                None
            }
        }
    }

    /// Find the first root-device service of `service_type` and resolve its URLs.
    ///
    /// Relative URLs are resolved against the document's `URLBase`, or against
    /// `location` when it has none. A URL that cannot be resolved is reported
    /// and left empty; the service still counts as found.
    pub fn find_and_parse_service(
        &self,
        desc_doc: &Element,
        location: &str,
        service_type: &str,
    ) -> Option<ServiceEndpoints> {
        let base = base_url(desc_doc, location);
        let services = first_service_list(desc_doc).unwrap_or_default();

        for service in services {
            let Some(candidate) = self.first_element_item(service, "serviceType") else {
                continue;
            };
            if candidate != service_type {
                continue;
            }

            self.print(format_args!("Found service: {}\n", service_type));
            let service_id = self.first_element_item(service, "serviceId");
            self.print(format_args!(
                "serviceId: {}\n",
                service_id.as_deref().unwrap_or(self.config().null_placeholder.as_str())
            ));

            let rel_control_url = self.first_element_item(service, "controlURL");
            let rel_event_url = self.first_element_item(service, "eventSubURL");

            return Some(ServiceEndpoints {
                service_id,
                control_url: self.resolve_reported("controlURL", &base, rel_control_url.as_deref()),
                event_url: self.resolve_reported("eventURL", &base, rel_event_url.as_deref()),
            });
        }

        None
    }

    /// Parse a description document, then look the service up in it.
    pub fn find_service_in_xml(
        &self,
        xml: &str,
        location: &str,
        service_type: &str,
    ) -> Result<Option<ServiceEndpoints>> {
        let doc = parse_document(xml)?;
        Ok(self.find_and_parse_service(&doc, location, service_type))
    }

    fn resolve_reported(&self, what: &str, base: &str, relative: Option<&str>) -> Option<String> {
        let resolved = relative.and_then(|relative| {
            resolve_url(base, relative)
                .map_err(|e| warn!("{}", e))
                .ok()
        });

        if resolved.is_none() {
            self.print(format_args!(
                "Error generating {} from {} + {}\n",
                what,
                base,
                relative.unwrap_or(self.config().null_placeholder.as_str())
            ));
        }
        resolved
    }
}
