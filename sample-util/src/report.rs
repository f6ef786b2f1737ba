//! Verbose dumps of callback events.

use std::fmt::Display;

use tracing::warn;
use upnp_dom::print_node;
use xmltree::Element;

use crate::context::SampleUtil;
use crate::event::{CallbackEvent, Discovery, EventSubscribe, EventType};

/// Column at which `=` starts in a field line.
const LABEL_WIDTH: usize = 12;

fn field(label: &str, value: impl Display) -> String {
    format!("{:<width$}=  {}\n", label, value, width = LABEL_WIDTH)
}

impl SampleUtil {
    /// Print the canonical name of an event kind on its own line.
    pub fn print_event_type(&self, event_type: EventType) {
        self.print(format_args!("{}\n", event_type.as_str()));
    }

    /// Print every field of a callback event between two rules.
    ///
    /// The display lock is held for the whole dump so concurrent callbacks
    /// never interleave their output.
    pub fn print_event(&self, event: &CallbackEvent) {
        let _display = self.display_lock();
        let width = self.config().separator_width;
        let heavy = "=".repeat(width);
        let light = "-".repeat(width);

        self.print(format_args!("\n\n\n{}\n", heavy));
        self.print(format_args!("{}\n", light));
        self.print_event_type(event.event_type());

        match event {
            CallbackEvent::AdvertisementAlive(d)
            | CallbackEvent::AdvertisementByebye(d)
            | CallbackEvent::SearchResult(d) => self.print_discovery(d),
            CallbackEvent::SearchTimeout => {}
            CallbackEvent::ActionRequest(a) => {
                let block = [
                    field("ErrCode", a.err_code),
                    field("ErrStr", &a.err_str),
                    field("ActionName", &a.action_name),
                    field("UDN", &a.dev_udn),
                    field("ServiceID", &a.service_id),
                ]
                .concat();
                self.print(format_args!("{}", block));
                self.print_document("ActRequest", a.action_request.as_ref());
                self.print_document("ActResult", a.action_result.as_ref());
            }
            CallbackEvent::ActionComplete(a) => {
                let block = [field("ErrCode", a.err_code), field("CtrlUrl", &a.ctrl_url)].concat();
                self.print(format_args!("{}", block));
                self.print_document("ActRequest", a.action_request.as_ref());
                self.print_document("ActResult", a.action_result.as_ref());
            }
            CallbackEvent::GetVarRequest(sv) => {
                let block = [
                    field("ErrCode", sv.err_code),
                    field("ErrStr", &sv.err_str),
                    field("UDN", &sv.dev_udn),
                    field("ServiceID", &sv.service_id),
                    field("StateVarName", &sv.state_var_name),
                    field("CurrentVal", self.or_null(sv.current_val.as_deref())),
                ]
                .concat();
                self.print(format_args!("{}", block));
            }
            CallbackEvent::GetVarComplete(sv) => {
                let block = [
                    field("ErrCode", sv.err_code),
                    field("CtrlUrl", &sv.ctrl_url),
                    field("StateVarName", &sv.state_var_name),
                    field("CurrentVal", self.or_null(sv.current_val.as_deref())),
                ]
                .concat();
                self.print(format_args!("{}", block));
            }
            CallbackEvent::SubscriptionRequest(sr) => {
                let block = [
                    field("ServiceID", &sr.service_id),
                    field("UDN", &sr.udn),
                    field("SID", &sr.sid),
                ]
                .concat();
                self.print(format_args!("{}", block));
            }
            CallbackEvent::EventReceived(e) => {
                let changed = e.changed_variables.as_ref().and_then(|vars| {
                    print_node(vars)
                        .map_err(|err| warn!("Cannot serialize changed variables: {}", err))
                        .ok()
                });
                let block = [
                    field("SID", &e.sid),
                    field("EventKey", e.event_key),
                    field("ChangedVars", self.or_null(changed.as_deref())),
                ]
                .concat();
                self.print(format_args!("{}", block));
            }
            CallbackEvent::RenewalComplete(es) => {
                let block = [
                    field("SID", &es.sid),
                    field("ErrCode", es.err_code),
                    field("TimeOut", es.timeout),
                ]
                .concat();
                self.print(format_args!("{}", block));
            }
            CallbackEvent::SubscribeComplete(es)
            | CallbackEvent::UnsubscribeComplete(es)
            | CallbackEvent::AutorenewalFailed(es)
            | CallbackEvent::SubscriptionExpired(es) => self.print_subscription(es),
        }

        self.print(format_args!("{}\n{}\n\n\n\n", light, heavy));
    }

    fn print_discovery(&self, d: &Discovery) {
        let block = [
            field("ErrCode", d.err_code),
            field("Expires", d.expires),
            field("DeviceId", &d.device_id),
            field("DeviceType", &d.device_type),
            field("ServiceType", &d.service_type),
            field("ServiceVer", &d.service_ver),
            field("Location", &d.location),
            field("OS", &d.os),
            field("Date", &d.date),
            field("Ext", &d.ext),
        ]
        .concat();
        self.print(format_args!("{}", block));
    }

    fn print_subscription(&self, es: &EventSubscribe) {
        let block = [
            field("SID", &es.sid),
            field("ErrCode", es.err_code),
            field("PublisherURL", &es.publisher_url),
            field("TimeOut", es.timeout),
        ]
        .concat();
        self.print(format_args!("{}", block));
    }

    /// One line holding a serialized document; skipped if serialization fails.
    fn print_document(&self, label: &str, doc: Option<&Element>) {
        match doc {
            Some(doc) => match print_node(doc) {
                Ok(xml) => {
                    self.print(format_args!("{}", field(label, xml)));
                }
                Err(e) => warn!("Cannot serialize {}: {}", label, e),
            },
            None => {
                self.print(format_args!("{}", field(label, &self.config().null_placeholder)));
            }
        }
    }

    fn or_null<'a>(&'a self, value: Option<&'a str>) -> &'a str {
        value.unwrap_or(self.config().null_placeholder.as_str())
    }
}
