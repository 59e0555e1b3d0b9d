//! App Router

use salvo::Router;

use crate::{auth, bookings, customers, payments, reports, rooms, tenancy};

pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .hoop(tenancy::middleware::handler)
        .push(
            Router::with_path("rooms")
                .get(rooms::index::handler)
                .post(rooms::create::handler)
                .push(
                    Router::with_path("{room}")
                        .get(rooms::get::handler)
                        .put(rooms::update::handler),
                ),
        )
        .push(
            Router::with_path("customers")
                .get(customers::index::handler)
                .post(customers::create::handler)
                .push(Router::with_path("{customer}").get(customers::get::handler)),
        )
        .push(
            Router::with_path("bookings")
                .get(bookings::index::handler)
                .post(bookings::create::handler)
                .push(
                    Router::with_path("{booking}")
                        .get(bookings::get::handler)
                        .push(Router::with_path("check-in").post(bookings::check_in::handler))
                        .push(Router::with_path("check-out").post(bookings::check_out::handler))
                        .push(Router::with_path("cancel").post(bookings::cancel::handler))
                        .push(
                            Router::with_path("payments")
                                .get(payments::index::handler)
                                .post(payments::create::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("reports")
                .push(Router::with_path("occupancy").get(reports::occupancy::handler))
                .push(Router::with_path("revenue").get(reports::revenue::handler)),
        )
}
