//! Typed role/user/grant views. RBAC is served over gRPC only.

use milvus_client_proto::milvus as proto;

/// A role and the users holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    /// Role name.
    pub role: String,
    /// Users granted this role.
    pub users: Vec<String>,
}

impl RoleInfo {
    /// Build from a wire result.
    #[must_use]
    pub fn from_proto(result: &proto::RoleResult) -> Self {
        Self {
            role: result
                .role
                .as_ref()
                .map(|role| role.name.clone())
                .unwrap_or_default(),
            users: result.users.iter().map(|user| user.name.clone()).collect(),
        }
    }
}

/// A user and the roles granted to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Username.
    pub user: String,
    /// Roles granted to the user.
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Build from a wire result.
    #[must_use]
    pub fn from_proto(result: &proto::UserResult) -> Self {
        Self {
            user: result
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default(),
            roles: result.roles.iter().map(|role| role.name.clone()).collect(),
        }
    }
}

/// A single privilege grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantInfo {
    /// Role the grant applies to.
    pub role: String,
    /// Object type, e.g. `Collection` or `Global`.
    pub object: String,
    /// Object name, `*` for all.
    pub object_name: String,
    /// User who issued the grant.
    pub grantor_user: String,
    /// The granted privilege.
    pub privilege: String,
}

impl GrantInfo {
    /// Build from a wire entity.
    #[must_use]
    pub fn from_proto(entity: &proto::GrantEntity) -> Self {
        let grantor = entity.grantor.as_ref();
        Self {
            role: entity
                .role
                .as_ref()
                .map(|role| role.name.clone())
                .unwrap_or_default(),
            object: entity
                .object
                .as_ref()
                .map(|object| object.name.clone())
                .unwrap_or_default(),
            object_name: entity.object_name.clone(),
            grantor_user: grantor
                .and_then(|g| g.user.as_ref())
                .map(|user| user.name.clone())
                .unwrap_or_default(),
            privilege: grantor
                .and_then(|g| g.privilege.as_ref())
                .map(|privilege| privilege.name.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_flattens_nested_entities() {
        let entity = proto::GrantEntity {
            role: Some(proto::RoleEntity {
                name: "reader".to_owned(),
            }),
            object: Some(proto::ObjectEntity {
                name: "Collection".to_owned(),
            }),
            object_name: "films".to_owned(),
            grantor: Some(proto::GrantorEntity {
                user: Some(proto::UserEntity {
                    name: "root".to_owned(),
                }),
                privilege: Some(proto::PrivilegeEntity {
                    name: "Search".to_owned(),
                }),
            }),
        };
        let info = GrantInfo::from_proto(&entity);
        assert_eq!(info.role, "reader");
        assert_eq!(info.object_name, "films");
        assert_eq!(info.grantor_user, "root");
        assert_eq!(info.privilege, "Search");
    }
}
