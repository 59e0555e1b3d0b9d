//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use innkeep_app::{
    auth::{MockAuthService, UserUuid},
    context::AppContext,
    domain::{
        bookings::{
            MockBookingsService,
            records::{BookingRecord, BookingStatus, BookingUuid},
        },
        customers::{
            MockCustomersService,
            records::{CustomerRecord, CustomerUuid},
        },
        memberships::{
            MockMembershipsService,
            records::{MembershipRole, TenantScope},
        },
        payments::{
            MockPaymentsService,
            records::{PaymentRecord, PaymentUuid},
        },
        reports::MockReportsService,
        rooms::{
            MockRoomsService,
            records::{RoomRecord, RoomUuid},
        },
        tenants::{MockTenantsService, records::TenantUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_TENANT_UUID: TenantUuid = TenantUuid::from_uuid(Uuid::nil());

/// Scope injected ahead of handlers under test, standing in for the auth and
/// tenancy middleware chain.
#[salvo::handler]
pub(crate) async fn inject_scope(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_tenant_scope(TenantScope {
        tenant: TEST_TENANT_UUID,
        role: MembershipRole::Staff,
    });

    ctrl.call_next(req, depot, res).await;
}

/// User injected ahead of the tenancy middleware under test, standing in for
/// the auth middleware.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);

    ctrl.call_next(req, depot, res).await;
}

fn strict_tenants_mock() -> MockTenantsService {
    let mut tenants = MockTenantsService::new();

    tenants.expect_create_tenant().never();
    tenants.expect_get_tenant().never();

    tenants
}

fn strict_memberships_mock() -> MockMembershipsService {
    let mut memberships = MockMembershipsService::new();

    memberships.expect_resolve_scope().never();
    memberships.expect_grant_membership().never();
    memberships.expect_list_memberships_for_user().never();

    memberships
}

fn strict_rooms_mock() -> MockRoomsService {
    let mut rooms = MockRoomsService::new();

    rooms.expect_create_room().never();
    rooms.expect_get_room().never();
    rooms.expect_list_rooms().never();
    rooms.expect_update_room().never();

    rooms
}

fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_create_customer().never();
    customers.expect_get_customer().never();
    customers.expect_list_customers().never();

    customers
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking().never();
    bookings.expect_get_booking().never();
    bookings.expect_list_bookings().never();
    bookings.expect_check_in().never();
    bookings.expect_check_out().never();
    bookings.expect_cancel().never();

    bookings
}

fn strict_payments_mock() -> MockPaymentsService {
    let mut payments = MockPaymentsService::new();

    payments.expect_record_payment().never();
    payments.expect_list_payments_for_booking().never();

    payments
}

fn strict_reports_mock() -> MockReportsService {
    let mut reports = MockReportsService::new();

    reports.expect_occupancy().never();
    reports.expect_revenue().never();

    reports
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

/// Context where every service rejects every call. Tests swap in the one
/// service they exercise.
fn strict_context() -> AppContext {
    AppContext {
        tenants: Arc::new(strict_tenants_mock()),
        memberships: Arc::new(strict_memberships_mock()),
        rooms: Arc::new(strict_rooms_mock()),
        customers: Arc::new(strict_customers_mock()),
        bookings: Arc::new(strict_bookings_mock()),
        payments: Arc::new(strict_payments_mock()),
        reports: Arc::new(strict_reports_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(auth),
        ..strict_context()
    }))
}

pub(crate) fn state_with_memberships(memberships: MockMembershipsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        memberships: Arc::new(memberships),
        ..strict_context()
    }))
}

pub(crate) fn state_with_rooms(rooms: MockRoomsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        rooms: Arc::new(rooms),
        ..strict_context()
    }))
}

pub(crate) fn state_with_customers(customers: MockCustomersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        customers: Arc::new(customers),
        ..strict_context()
    }))
}

pub(crate) fn state_with_bookings(bookings: MockBookingsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        bookings: Arc::new(bookings),
        ..strict_context()
    }))
}

pub(crate) fn state_with_payments(payments: MockPaymentsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        payments: Arc::new(payments),
        ..strict_context()
    }))
}

pub(crate) fn state_with_reports(reports: MockReportsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        reports: Arc::new(reports),
        ..strict_context()
    }))
}

pub(crate) fn rooms_service(rooms: MockRoomsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_rooms(rooms)))
            .hoop(inject_scope)
            .push(route),
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_customers(customers)))
            .hoop(inject_scope)
            .push(route),
    )
}

pub(crate) fn bookings_service(bookings: MockBookingsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_bookings(bookings)))
            .hoop(inject_scope)
            .push(route),
    )
}

pub(crate) fn payments_service(payments: MockPaymentsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_payments(payments)))
            .hoop(inject_scope)
            .push(route),
    )
}

pub(crate) fn reports_service(reports: MockReportsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_reports(reports)))
            .hoop(inject_scope)
            .push(route),
    )
}

pub(crate) fn make_room(uuid: RoomUuid) -> RoomRecord {
    RoomRecord {
        uuid,
        number: "101".to_string(),
        room_type: "DOUBLE".to_string(),
        rate_cents: 12_000,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid) -> CustomerRecord {
    CustomerRecord {
        uuid,
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_booking(uuid: BookingUuid) -> BookingRecord {
    BookingRecord {
        uuid,
        room_uuid: RoomUuid::from_uuid(Uuid::nil()),
        customer_uuid: CustomerUuid::from_uuid(Uuid::nil()),
        check_in: date(2026, 3, 1),
        check_out: date(2026, 3, 4),
        status: BookingStatus::Pending,
        total_cents: 36_000,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_payment(uuid: PaymentUuid, booking_uuid: BookingUuid) -> PaymentRecord {
    PaymentRecord {
        uuid,
        booking_uuid,
        amount_cents: 5_000,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
