use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user_paginated;
mod mark_read;
mod unread_count;
