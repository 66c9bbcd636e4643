//! Route table and OpenAPI document.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        bulk::{BulkFailureKindDto, BulkStatusDto},
        employee::{EmployeeDto, EmployeeInputDto},
        order::{AssignCollectorDto, CheckOrderDto, CreateOrderDto, OrderDto},
        project::{ProjectDetailDto, ProjectDto, ProjectInputDto, ProjectUserDto},
        role::{CreateRoleDto, RoleDto},
        team::{TeamDetailDto, TeamDto, TeamEmployeeDto, TeamInputDto, TeamUserDto},
        user::{
            AssignRoleDto, ChangePasswordDto, LoginDto, PaginatedUsersDto, PasswordResetDto,
            RegisterUserDto, SetBlockedDto, UpdateUserDto, UserDto, UserProfileDto,
        },
    },
    server::{
        controller::{auth, employee, order, ping, project, role, team, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Warehouse orders API"),
    paths(
        ping::ping,
        auth::login,
        auth::logout,
        auth::get_user,
        user::register,
        user::get_users,
        user::update_user,
        user::set_blocked,
        user::reset_password,
        user::change_password,
        user::add_role,
        user::remove_role,
        role::create_role,
        role::get_roles,
        role::delete_role,
        employee::create_employees,
        employee::get_employees,
        employee::get_employee,
        employee::get_employee_by_code,
        employee::update_employee,
        employee::delete_employee,
        team::create_teams,
        team::get_teams,
        team::get_team,
        team::rename_team,
        team::delete_team,
        team::add_team_employee,
        team::remove_team_employee,
        team::add_team_user,
        team::remove_team_user,
        project::create_project,
        project::get_projects,
        project::get_project,
        project::update_project,
        project::delete_project,
        project::add_project_user,
        project::remove_project_user,
        order::create_orders,
        order::get_orders,
        order::get_order,
        order::get_order_by_uid,
        order::assign_collectors,
        order::check_orders,
        order::get_assembly,
        order::get_checked,
        order::get_user_orders,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        BulkStatusDto,
        BulkFailureKindDto,
        LoginDto,
        RegisterUserDto,
        UserDto,
        UserProfileDto,
        PaginatedUsersDto,
        UpdateUserDto,
        SetBlockedDto,
        ChangePasswordDto,
        PasswordResetDto,
        AssignRoleDto,
        RoleDto,
        CreateRoleDto,
        EmployeeDto,
        EmployeeInputDto,
        TeamDto,
        TeamDetailDto,
        TeamInputDto,
        TeamEmployeeDto,
        TeamUserDto,
        ProjectDto,
        ProjectDetailDto,
        ProjectInputDto,
        ProjectUserDto,
        OrderDto,
        CreateOrderDto,
        AssignCollectorDto,
        CheckOrderDto,
    )),
    tags(
        (name = "ping", description = "Liveness check"),
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "User accounts and administration"),
        (name = "role", description = "Role management"),
        (name = "employee", description = "Warehouse employees"),
        (name = "team", description = "Teams of employees and users"),
        (name = "project", description = "Projects granting order visibility"),
        (name = "order", description = "Order import, assembly and checking"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping::ping))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/users", post(user::register).get(user::get_users))
        .route("/api/users/{user_id}", put(user::update_user))
        .route("/api/users/{user_id}/blocked", put(user::set_blocked))
        .route(
            "/api/users/{user_id}/password/reset",
            post(user::reset_password),
        )
        .route("/api/users/{user_id}/roles", post(user::add_role))
        .route(
            "/api/users/{user_id}/roles/{role_id}",
            delete(user::remove_role),
        )
        .route("/api/user/password", put(user::change_password))
        .route("/api/user/orders", get(order::get_user_orders))
        .route("/api/roles", post(role::create_role).get(role::get_roles))
        .route("/api/roles/{role_id}", delete(role::delete_role))
        .route(
            "/api/employees",
            post(employee::create_employees).get(employee::get_employees),
        )
        .route(
            "/api/employees/{employee_id}",
            get(employee::get_employee)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
        .route(
            "/api/employees/code/{code}",
            get(employee::get_employee_by_code),
        )
        .route("/api/teams", post(team::create_teams).get(team::get_teams))
        .route(
            "/api/teams/{team_id}",
            get(team::get_team)
                .put(team::rename_team)
                .delete(team::delete_team),
        )
        .route(
            "/api/teams/{team_id}/employees",
            post(team::add_team_employee),
        )
        .route(
            "/api/teams/{team_id}/employees/{employee_id}",
            delete(team::remove_team_employee),
        )
        .route("/api/teams/{team_id}/users", post(team::add_team_user))
        .route(
            "/api/teams/{team_id}/users/{user_id}",
            delete(team::remove_team_user),
        )
        .route(
            "/api/projects",
            post(project::create_project).get(project::get_projects),
        )
        .route(
            "/api/projects/{project_id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{project_id}/users",
            post(project::add_project_user),
        )
        .route(
            "/api/projects/{project_id}/users/{user_id}",
            delete(project::remove_project_user),
        )
        .route(
            "/api/orders",
            post(order::create_orders).get(order::get_orders),
        )
        .route("/api/orders/collector", put(order::assign_collectors))
        .route("/api/orders/check", put(order::check_orders))
        .route("/api/orders/assembly", get(order::get_assembly))
        .route("/api/orders/checked", get(order::get_checked))
        .route("/api/orders/uid/{order_uid}", get(order::get_order_by_uid))
        .route("/api/orders/{order_id}", get(order::get_order))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that every routed operation is present in the OpenAPI document.
    ///
    /// Expected: bulk and lookup paths documented
    #[test]
    fn openapi_lists_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/orders",
            "/api/orders/collector",
            "/api/orders/check",
            "/api/user/orders",
            "/api/users/{user_id}",
            "/api/employees",
            "/api/teams/{team_id}/users/{user_id}",
            "/api/projects/{project_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
