//! 班级成员存储操作

use super::SeaOrmStorage;
use crate::entity::class_users::{ActiveModel, Column, Entity as ClassUsers};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    class_users::{
        entities::{ClassUser, ClassUserRole},
        requests::{ClassUserQuery, UpdateClassUserRequest},
        responses::{ClassUserItem, ClassUserListResponse},
    },
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 加入班级
    pub async fn join_class_impl(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassUserRole,
    ) -> Result<ClassUser> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("加入班级失败: {e}")))?;

        Ok(result.into_class_user())
    }

    /// 离开/移出班级
    pub async fn leave_class_impl(&self, user_id: i64, class_id: i64) -> Result<bool> {
        let result = ClassUsers::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("退出班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新班级成员
    pub async fn update_class_user_impl(
        &self,
        class_id: i64,
        class_user_id: i64,
        update_data: UpdateClassUserRequest,
    ) -> Result<Option<ClassUser>> {
        let Some(existing) = ClassUsers::find_by_id(class_user_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询班级成员失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(role) = update_data.role {
            model.role = Set(role.to_string());
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新班级成员失败: {e}")))?;

        Ok(Some(result.into_class_user()))
    }

    /// 分页列出班级成员（带用户信息）
    pub async fn list_class_users_with_pagination_impl(
        &self,
        class_id: i64,
        query: ClassUserQuery,
    ) -> Result<ClassUserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = ClassUsers::find().filter(Column::ClassId.eq(class_id));

        if let Some(role) = &query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        select = select.order_by_asc(Column::JoinedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            CodeTrackError::database_operation(format!("查询班级成员总数失败: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            CodeTrackError::database_operation(format!("查询班级成员页数失败: {e}"))
        })?;

        let members = paginator.fetch_page(page - 1).await.map_err(|e| {
            CodeTrackError::database_operation(format!("查询班级成员列表失败: {e}"))
        })?;

        // 批量取用户信息
        let user_ids: Vec<i64> = members.iter().map(|m| m.user_id).collect();
        let users = if user_ids.is_empty() {
            vec![]
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| CodeTrackError::database_operation(format!("查询用户失败: {e}")))?
        };
        let user_map: std::collections::HashMap<i64, _> =
            users.into_iter().map(|u| (u.id, u)).collect();

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let mut items = Vec::with_capacity(members.len());
        for member in members {
            let Some(user) = user_map.get(&member.user_id) else {
                continue;
            };
            // 搜索在用户名/显示名上做内存过滤（成员量级小）
            if let Some(ref s) = search {
                let name_match = user.username.contains(s.as_str())
                    || user
                        .profile_name
                        .as_deref()
                        .is_some_and(|n| n.contains(s.as_str()));
                if !name_match {
                    continue;
                }
            }
            let cu = member.into_class_user();
            items.push(ClassUserItem {
                id: cu.id,
                user_id: cu.user_id,
                username: user.username.clone(),
                profile_name: user.profile_name.clone(),
                avatar_url: user.avatar_url.clone(),
                role: cu.role,
                joined_at: cu.joined_at,
            });
        }

        Ok(ClassUserListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 获取用户在班级中的信息
    pub async fn get_class_user_by_user_id_and_class_id_impl(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassUser>> {
        let result = ClassUsers::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.map(|m| m.into_class_user()))
    }

    /// 列出班级全部成员（不分页）
    pub async fn list_class_members_impl(&self, class_id: i64) -> Result<Vec<User>> {
        let members = ClassUsers::find()
            .filter(Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询班级成员失败: {e}")))?;

        let user_ids: Vec<i64> = members.iter().map(|m| m.user_id).collect();
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .order_by_asc(UserColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }
}
