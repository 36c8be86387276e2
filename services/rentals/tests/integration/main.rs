mod helpers;

mod allotment_test;
mod availability_test;
mod ledger_test;
mod router_test;
