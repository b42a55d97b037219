//! Role and privilege requests. The facade does not expose RBAC, so
//! every REST renderer here returns `NotSupported`.

use super::{RestRequest, require_non_empty};
use crate::error::{Error, Result};
use milvus_client_proto::common::{MsgBase, MsgType};
use milvus_client_proto::milvus as proto;

/// Create a role.
#[derive(Debug, Clone)]
pub struct CreateRoleRequest {
    /// Role name.
    pub role_name: Box<str>,
}

impl CreateRoleRequest {
    /// Build the request.
    #[must_use]
    pub fn new(role_name: impl Into<Box<str>>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.role_name, "role name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::CreateRoleRequest {
        proto::CreateRoleRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            entity: Some(proto::RoleEntity {
                name: self.role_name.as_ref().to_owned(),
            }),
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.createRole", "REST"))
    }
}

/// Drop a role.
#[derive(Debug, Clone)]
pub struct DropRoleRequest {
    /// Role name.
    pub role_name: Box<str>,
}

impl DropRoleRequest {
    /// Build the request.
    #[must_use]
    pub fn new(role_name: impl Into<Box<str>>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.role_name, "role name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::DropRoleRequest {
        proto::DropRoleRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            role_name: self.role_name.as_ref().to_owned(),
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.dropRole", "REST"))
    }
}

/// Grant a role to a user, or revoke it.
#[derive(Debug, Clone)]
pub struct OperateUserRoleRequest {
    /// Username.
    pub username: Box<str>,
    /// Role name.
    pub role_name: Box<str>,
    /// True grants the role, false revokes it.
    pub grant: bool,
}

impl OperateUserRoleRequest {
    /// Grant a role to a user.
    #[must_use]
    pub fn add(username: impl Into<Box<str>>, role_name: impl Into<Box<str>>) -> Self {
        Self {
            username: username.into(),
            role_name: role_name.into(),
            grant: true,
        }
    }

    /// Revoke a role from a user.
    #[must_use]
    pub fn remove(username: impl Into<Box<str>>, role_name: impl Into<Box<str>>) -> Self {
        Self {
            username: username.into(),
            role_name: role_name.into(),
            grant: false,
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.username, "username")?;
        require_non_empty(&self.role_name, "role name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::OperateUserRoleRequest {
        let r#type = if self.grant {
            proto::OperateUserRoleType::AddUserToRole
        } else {
            proto::OperateUserRoleType::RemoveUserFromRole
        };
        proto::OperateUserRoleRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            username: self.username.as_ref().to_owned(),
            role_name: self.role_name.as_ref().to_owned(),
            r#type: r#type as i32,
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.operateUserRole", "REST"))
    }
}

/// List roles, optionally one role with its members.
#[derive(Debug, Clone, Default)]
pub struct SelectRoleRequest {
    /// Role to select; empty selects every role.
    pub role_name: Box<str>,
    /// Include the users holding each role.
    pub include_user_info: bool,
}

impl SelectRoleRequest {
    /// Select every role.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select one role.
    #[must_use]
    pub fn named(role_name: impl Into<Box<str>>) -> Self {
        Self {
            role_name: role_name.into(),
            include_user_info: false,
        }
    }

    /// Include role membership in the response.
    #[must_use]
    pub const fn include_user_info(mut self) -> Self {
        self.include_user_info = true;
        self
    }

    /// Nothing to check: an empty role name selects everything.
    pub const fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::SelectRoleRequest {
        let role = if self.role_name.is_empty() {
            None
        } else {
            Some(proto::RoleEntity {
                name: self.role_name.as_ref().to_owned(),
            })
        };
        proto::SelectRoleRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            role,
            include_user_info: self.include_user_info,
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.selectRole", "REST"))
    }
}

/// List users, optionally one user with their roles.
#[derive(Debug, Clone, Default)]
pub struct SelectUserRequest {
    /// User to select; empty selects every user.
    pub username: Box<str>,
    /// Include the roles granted to each user.
    pub include_role_info: bool,
}

impl SelectUserRequest {
    /// Select every user.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select one user.
    #[must_use]
    pub fn named(username: impl Into<Box<str>>) -> Self {
        Self {
            username: username.into(),
            include_role_info: false,
        }
    }

    /// Include granted roles in the response.
    #[must_use]
    pub const fn include_role_info(mut self) -> Self {
        self.include_role_info = true;
        self
    }

    /// Nothing to check: an empty username selects everything.
    pub const fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::SelectUserRequest {
        let user = if self.username.is_empty() {
            None
        } else {
            Some(proto::UserEntity {
                name: self.username.as_ref().to_owned(),
            })
        };
        proto::SelectUserRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            user,
            include_role_info: self.include_role_info,
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.selectUser", "REST"))
    }
}

/// Grant or revoke a privilege on an object for a role.
#[derive(Debug, Clone)]
pub struct OperatePrivilegeRequest {
    /// Role the privilege applies to.
    pub role_name: Box<str>,
    /// Object type, e.g. `Collection` or `Global`.
    pub object: Box<str>,
    /// Object name, `*` for all.
    pub object_name: Box<str>,
    /// The privilege, e.g. `Search`.
    pub privilege: Box<str>,
    /// True grants, false revokes.
    pub grant: bool,
}

impl OperatePrivilegeRequest {
    /// Grant a privilege.
    #[must_use]
    pub fn grant(
        role_name: impl Into<Box<str>>,
        object: impl Into<Box<str>>,
        object_name: impl Into<Box<str>>,
        privilege: impl Into<Box<str>>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            object: object.into(),
            object_name: object_name.into(),
            privilege: privilege.into(),
            grant: true,
        }
    }

    /// Revoke a privilege.
    #[must_use]
    pub fn revoke(
        role_name: impl Into<Box<str>>,
        object: impl Into<Box<str>>,
        object_name: impl Into<Box<str>>,
        privilege: impl Into<Box<str>>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            object: object.into(),
            object_name: object_name.into(),
            privilege: privilege.into(),
            grant: false,
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.role_name, "role name")?;
        require_non_empty(&self.object, "object type")?;
        require_non_empty(&self.object_name, "object name")?;
        require_non_empty(&self.privilege, "privilege")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::OperatePrivilegeRequest {
        let r#type = if self.grant {
            proto::OperatePrivilegeType::Grant
        } else {
            proto::OperatePrivilegeType::Revoke
        };
        proto::OperatePrivilegeRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            entity: Some(proto::GrantEntity {
                role: Some(proto::RoleEntity {
                    name: self.role_name.as_ref().to_owned(),
                }),
                object: Some(proto::ObjectEntity {
                    name: self.object.as_ref().to_owned(),
                }),
                object_name: self.object_name.as_ref().to_owned(),
                grantor: Some(proto::GrantorEntity {
                    user: None,
                    privilege: Some(proto::PrivilegeEntity {
                        name: self.privilege.as_ref().to_owned(),
                    }),
                }),
            }),
            r#type: r#type as i32,
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.operatePrivilege", "REST"))
    }
}

/// List the grants of a role.
#[derive(Debug, Clone)]
pub struct SelectGrantRequest {
    /// Role whose grants to list.
    pub role_name: Box<str>,
    /// Restrict to one object type; empty lists everything.
    pub object: Box<str>,
    /// Restrict to one object name; empty lists everything.
    pub object_name: Box<str>,
}

impl SelectGrantRequest {
    /// List every grant of a role.
    #[must_use]
    pub fn for_role(role_name: impl Into<Box<str>>) -> Self {
        Self {
            role_name: role_name.into(),
            object: Box::from(""),
            object_name: Box::from(""),
        }
    }

    /// Check the request before any bytes are sent.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.role_name, "role name")
    }

    /// Render the gRPC message.
    #[must_use]
    pub fn to_grpc(&self, _db_name: &str) -> proto::SelectGrantRequest {
        let object = if self.object.is_empty() {
            None
        } else {
            Some(proto::ObjectEntity {
                name: self.object.as_ref().to_owned(),
            })
        };
        proto::SelectGrantRequest {
            base: Some(MsgBase::new(MsgType::Undefined)),
            entity: Some(proto::GrantEntity {
                role: Some(proto::RoleEntity {
                    name: self.role_name.as_ref().to_owned(),
                }),
                object,
                object_name: self.object_name.as_ref().to_owned(),
                grantor: None,
            }),
        }
    }

    /// RBAC is gRPC-only.
    pub fn to_rest(&self, _db_name: &str) -> Result<RestRequest> {
        Err(Error::not_supported("rbac.selectGrant", "REST"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rbac_request_is_grpc_only() {
        assert!(matches!(
            CreateRoleRequest::new("reader").to_rest("default").err(),
            Some(Error::NotSupported { .. })
        ));
        assert!(matches!(
            SelectUserRequest::all().to_rest("default").err(),
            Some(Error::NotSupported { .. })
        ));
        assert!(matches!(
            OperatePrivilegeRequest::grant("reader", "Collection", "films", "Search")
                .to_rest("default")
                .err(),
            Some(Error::NotSupported { .. })
        ));
    }

    #[test]
    fn operate_user_role_picks_the_operation_type() {
        let add = OperateUserRoleRequest::add("alice", "reader").to_grpc("default");
        assert_eq!(add.r#type, proto::OperateUserRoleType::AddUserToRole as i32);
        let remove = OperateUserRoleRequest::remove("alice", "reader").to_grpc("default");
        assert_eq!(
            remove.r#type,
            proto::OperateUserRoleType::RemoveUserFromRole as i32
        );
    }

    #[test]
    fn grant_wraps_the_privilege_entity() {
        let wire = OperatePrivilegeRequest::grant("reader", "Collection", "films", "Search")
            .to_grpc("default");
        let entity = wire.entity.unwrap_or_default();
        assert_eq!(entity.object_name, "films");
        let privilege = entity
            .grantor
            .and_then(|g| g.privilege)
            .map(|p| p.name)
            .unwrap_or_default();
        assert_eq!(privilege, "Search");
    }
}
