//! Volunteer group endpoints.

use actix_web::web;

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::Detail;
use crate::inbound::http::extract::Authenticated;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{MembershipView, VolunteerGroupView};

/// Active volunteer groups ordered by name.
#[utoipa::path(
    get,
    path = "/api/volunteer-groups/",
    responses(
        (status = 200, description = "Active groups", body = [VolunteerGroupView]),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["volunteers"],
    operation_id = "listVolunteerGroups"
)]
pub async fn list_groups(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<VolunteerGroupView>>> {
    let groups = state.volunteers.groups().await?;
    Ok(web::Json(
        groups
            .into_iter()
            .map(|group| VolunteerGroupView::new(group, &state.media))
            .collect(),
    ))
}

/// Groups the caller belongs to.
#[utoipa::path(
    get,
    path = "/api/volunteer-groups/mine/",
    responses(
        (status = 200, description = "Caller memberships", body = [MembershipView]),
        (status = 401, description = "Missing or invalid token", body = Detail),
        (status = 405, description = "Method not allowed", body = Detail)
    ),
    tags = ["volunteers"],
    operation_id = "listMyVolunteerGroups",
    security(("TokenAuth" = []))
)]
pub async fn my_groups(
    state: web::Data<HttpState>,
    auth: Authenticated,
) -> ApiResult<web::Json<Vec<MembershipView>>> {
    let memberships = state.volunteers.memberships(auth.user).await?;
    Ok(web::Json(
        memberships.into_iter().map(MembershipView::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::http::header::AUTHORIZATION;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::{NewUser, VolunteerRole};
    use crate::domain::ports::UserRepository;
    use crate::inbound::http::test_utils::memory_state;

    #[rstest]
    #[actix_web::test]
    async fn lists_only_active_groups_with_logo_urls() {
        let (state, store) = memory_state();
        store.add_volunteer_group("Kitchen", "Cooking", Some("logos/k.png"), true);
        store.add_volunteer_group("Archive", "Old group", None, false);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/volunteer-groups/", web::get().to(list_groups)),
        )
        .await;

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/volunteer-groups/")
                .to_request(),
        )
        .await;
        let groups = body.as_array().expect("array");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["name"], "Kitchen");
        assert_eq!(groups[0]["logo"], "/media/logos/k.png");
    }

    #[rstest]
    #[actix_web::test]
    async fn my_groups_requires_a_token_and_lists_memberships() {
        let (state, store) = memory_state();
        let token = {
            let user = UserRepository::create(
                &store,
                &NewUser {
                    username: "amy".into(),
                    email: "a@x.com".into(),
                    password_hash: "hash".into(),
                },
            )
            .await
            .expect("user created");
            let group = store.add_volunteer_group("Kitchen", "Cooking", None, true);
            store.add_membership(user.id, group, VolunteerRole::Lead);
            state.auth.issue(user.id).await.expect("token issued")
        };
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/volunteer-groups/mine/", web::get().to(my_groups)),
        )
        .await;

        let anonymous = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/volunteer-groups/mine/")
                .to_request(),
        )
        .await;
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let body: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/volunteer-groups/mine/")
                .insert_header((AUTHORIZATION, format!("Token {}", token.as_str())))
                .to_request(),
        )
        .await;
        assert_eq!(body[0]["group_name"], "Kitchen");
        assert_eq!(body[0]["role"], "lead");
    }
}
