//! # Application Runtime / 应用运行时
//!
//! Holds the wired dependencies and the shared write locks, and hands out use
//! cases through [`UseCases`].

use std::sync::Arc;

use dh_app::{
    AddFuelRecord, AppDeps, EvaluateSetupGate, MarkSetupStep, ReadThrough, UpdateProfile,
    UserWriteLocks, WriteThrough,
};
use dh_core::sync::{Categories, FuelRecords, NicknameDomain, Payments, Vehicles};

pub struct AppRuntime {
    deps: AppDeps,
    write_locks: Arc<UserWriteLocks>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            deps,
            write_locks: Arc::new(UserWriteLocks::new()),
        }
    }

    /// Get use cases accessor.
    /// 获取用例访问器。
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Use case accessor for AppRuntime.
/// AppRuntime 的用例访问器。
///
/// Commands do not need to know which ports a use case needs; every
/// port-to-use-case connection lives here.
/// 命令不需要知道用例需要哪些端口；所有端口到用例的连接集中在这里。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    fn deps(&self) -> &AppDeps {
        &self.runtime.deps
    }

    fn locks(&self) -> Arc<UserWriteLocks> {
        self.runtime.write_locks.clone()
    }

    pub fn evaluate_setup_gate(&self) -> EvaluateSetupGate {
        EvaluateSetupGate::new(self.deps().remote.clone())
    }

    pub fn mark_setup_step(&self) -> MarkSetupStep {
        MarkSetupStep::new(self.deps().remote.clone())
    }

    pub fn update_profile(&self) -> UpdateProfile {
        UpdateProfile::new(self.deps().remote.clone())
    }

    pub fn read_payments(&self) -> ReadThrough<Payments> {
        ReadThrough::new(
            self.deps().remote.clone(),
            self.deps().payment_cache.clone(),
            self.locks(),
        )
    }

    pub fn write_payments(&self) -> WriteThrough<Payments> {
        WriteThrough::new(
            self.deps().remote.clone(),
            self.deps().payment_cache.clone(),
            self.locks(),
        )
    }

    pub fn read_categories(&self) -> ReadThrough<Categories> {
        ReadThrough::new(
            self.deps().remote.clone(),
            self.deps().category_cache.clone(),
            self.locks(),
        )
    }

    pub fn write_categories(&self) -> WriteThrough<Categories> {
        WriteThrough::new(
            self.deps().remote.clone(),
            self.deps().category_cache.clone(),
            self.locks(),
        )
    }

    pub fn read_nickname(&self) -> ReadThrough<NicknameDomain> {
        ReadThrough::new(
            self.deps().remote.clone(),
            self.deps().nickname_cache.clone(),
            self.locks(),
        )
    }

    pub fn write_nickname(&self) -> WriteThrough<NicknameDomain> {
        WriteThrough::new(
            self.deps().remote.clone(),
            self.deps().nickname_cache.clone(),
            self.locks(),
        )
    }

    pub fn read_vehicles(&self) -> ReadThrough<Vehicles> {
        ReadThrough::new(
            self.deps().remote.clone(),
            self.deps().vehicle_cache.clone(),
            self.locks(),
        )
    }

    pub fn write_vehicles(&self) -> WriteThrough<Vehicles> {
        WriteThrough::new(
            self.deps().remote.clone(),
            self.deps().vehicle_cache.clone(),
            self.locks(),
        )
    }

    pub fn read_fuel_records(&self) -> ReadThrough<FuelRecords> {
        ReadThrough::new(
            self.deps().remote.clone(),
            self.deps().fuel_record_cache.clone(),
            self.locks(),
        )
    }

    pub fn add_fuel_record(&self) -> AddFuelRecord {
        AddFuelRecord::new(
            self.deps().remote.clone(),
            self.deps().fuel_record_cache.clone(),
            self.locks(),
            self.deps().clock.clone(),
        )
    }
}
