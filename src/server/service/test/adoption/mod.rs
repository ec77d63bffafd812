use crate::{
    model::{adoption::AdoptionStatus, pet::PetStatus},
    server::{
        data::{adoption::AdoptionRepository, notification::NotificationRepository, pet::PetRepository},
        error::{auth::AuthError, AppError},
        model::adoption::SubmitAdoptionParam,
        service::adoption::AdoptionService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod submit;
