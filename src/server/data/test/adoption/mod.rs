use crate::{
    model::adoption::AdoptionStatus,
    server::{
        data::adoption::AdoptionRepository,
        model::adoption::{ListAdoptionsParam, SubmitAdoptionParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod get_paginated_detailed;
mod set_status;
