use crate::{
    model::pet::{PetSpecies, PetStatus},
    server::{
        data::pet::PetRepository,
        model::pet::{CreatePetParam, ListPetsParam, UpdatePetParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod set_status;
mod update;
