//! Stat-request dispatch and response building.
//!
//! One response object per request, in request order.  Unknown entities and
//! unroutable pairs produce `{"request_id": …, "error_message": "not found"}`
//! rather than an error; the response array itself is always emitted, even
//! when empty.

use std::io::Write;

use log::debug;
use serde_json::{json, Value};

use tc_render::MapRenderer;
use tc_routing::{RouteItem, TransportRouter};

use crate::input::StatRequest;
use crate::IoResult;

const NOT_FOUND: &str = "not found";

/// Answers stat requests against the loaded triple.
///
/// The catalogue is reached through the router, which was built over it and
/// carries the reference anyway.
pub struct StatProcessor<'a> {
    renderer: &'a MapRenderer,
    router: &'a TransportRouter<'a>,
}

impl<'a> StatProcessor<'a> {
    pub fn new(renderer: &'a MapRenderer, router: &'a TransportRouter<'a>) -> Self {
        Self { renderer, router }
    }

    /// Process every request and return the JSON response array.
    pub fn process(&self, requests: &[StatRequest]) -> Value {
        Value::Array(requests.iter().map(|r| self.respond(r)).collect())
    }

    /// Process requests and write the response array to `out`.
    pub fn write_responses(
        &self,
        requests: &[StatRequest],
        out: &mut impl Write,
    ) -> IoResult<()> {
        serde_json::to_writer(&mut *out, &self.process(requests))?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn respond(&self, request: &StatRequest) -> Value {
        match request {
            StatRequest::Stop { id, name } => self.stop_response(*id, name),
            StatRequest::Bus { id, name } => self.bus_response(*id, name),
            StatRequest::Map { id } => self.map_response(*id),
            StatRequest::Route { id, from, to } => self.route_response(*id, from, to),
        }
    }

    fn stop_response(&self, id: i64, name: &str) -> Value {
        match self.router.catalogue().stop_info(name) {
            Some(buses) => json!({
                "buses": buses.into_iter().collect::<Vec<_>>(),
                "request_id": id,
            }),
            None => not_found(id),
        }
    }

    fn bus_response(&self, id: i64, name: &str) -> Value {
        match self.router.catalogue().bus_info(name) {
            Some(info) => json!({
                "curvature": info.curvature,
                "request_id": id,
                "route_length": info.route_length,
                "stop_count": info.stop_count,
                "unique_stop_count": info.unique_stop_count,
            }),
            None => not_found(id),
        }
    }

    fn map_response(&self, id: i64) -> Value {
        debug!("rendering map for request {id}");
        json!({
            "map": self.renderer.render(self.router.catalogue()),
            "request_id": id,
        })
    }

    fn route_response(&self, id: i64, from: &str, to: &str) -> Value {
        let Some(info) = self.router.build_route(from, to) else {
            return not_found(id);
        };

        let catalogue = self.router.catalogue();
        let items: Vec<Value> = info
            .items
            .iter()
            .map(|item| match *item {
                RouteItem::Wait { stop, minutes } => json!({
                    "stop_name": catalogue.stop(stop).name,
                    "time": minutes,
                    "type": "Wait",
                }),
                RouteItem::Bus { bus, span_count, minutes } => json!({
                    "bus": catalogue.bus(bus).name,
                    "span_count": span_count,
                    "time": minutes,
                    "type": "Bus",
                }),
            })
            .collect();

        json!({
            "items": items,
            "request_id": id,
            "total_time": info.total_minutes,
        })
    }
}

fn not_found(id: i64) -> Value {
    json!({
        "request_id": id,
        "error_message": NOT_FOUND,
    })
}
