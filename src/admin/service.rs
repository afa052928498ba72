use uuid::Uuid;

use crate::admin::model::{AdminStatsResponse, AdminUserResponse};
use crate::auth::repository::AuthRepository;
use crate::error::AppError;
use crate::items::model::ItemStatus;
use crate::items::repository::ItemRepository;
use crate::rewards::service::RewardService;

#[derive(Clone)]
pub struct AdminService {
    auth_repository: AuthRepository,
    item_repository: ItemRepository,
    reward_service: RewardService,
}

impl AdminService {
    pub fn new(
        auth_repository: AuthRepository,
        item_repository: ItemRepository,
        reward_service: RewardService,
    ) -> Self {
        Self {
            auth_repository,
            item_repository,
            reward_service,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUserResponse>, AppError> {
        let users = self.auth_repository.list_users().await?;

        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let items_posted = self.item_repository.count_by_user(&user.id).await?;
            let summary = self.reward_service.summary_for(&user.id).await?;

            rows.push(AdminUserResponse {
                id: user.id,
                email: user.email,
                name: user.name,
                phone: user.phone,
                location: user.location,
                points: user.points,
                credited_points: summary.credited_points,
                items_posted,
                created_at: user.created_at,
            });
        }

        Ok(rows)
    }

    /// Removes the user together with everything they own: their items and
    /// their rewards.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AppError> {
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))?;

        let removed = self.auth_repository.delete_user(&user_id).await?;
        if !removed {
            return Err(AppError::NotFoundError(format!(
                "User with ID {} not found",
                user_id
            )));
        }

        self.item_repository.delete_by_user(&user_id).await?;
        self.reward_service.delete_for_user(&user_id).await?;

        Ok(())
    }

    pub async fn stats(&self) -> Result<AdminStatsResponse, AppError> {
        Ok(AdminStatsResponse {
            total_items: self.item_repository.count_items().await?,
            total_users: self.auth_repository.count_users().await?,
            pending_approval: self.item_repository.count_pending_approval().await?,
            completed_items: self
                .item_repository
                .count_by_status(ItemStatus::Completed)
                .await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::model::User;
    use crate::db::Store;
    use crate::items::model::{Item, ItemStatus};
    use crate::rewards::repository::RewardRepository;
    use chrono::Utc;

    struct TestContext {
        admin: AdminService,
        auth: AuthRepository,
        items: ItemRepository,
        rewards: RewardService,
    }

    fn test_context() -> TestContext {
        let dir = std::env::temp_dir().join(format!("recyclo-admin-test-{}", Uuid::new_v4()));
        let store = Store::open(&dir).unwrap();

        let auth = AuthRepository::new(store.clone());
        let items = ItemRepository::new(store.clone());
        let rewards = RewardService::new(RewardRepository::new(store));

        TestContext {
            admin: AdminService::new(auth.clone(), items.clone(), rewards.clone()),
            auth,
            items,
            rewards,
        }
    }

    async fn seed_user(ctx: &TestContext, email: &str) -> User {
        ctx.auth
            .create_user(User::new(
                email.into(),
                "not-a-real-hash".into(),
                "Jane Smith".into(),
                None,
                None,
            ))
            .await
            .unwrap()
    }

    async fn seed_item(ctx: &TestContext, user: &User, status: ItemStatus, approved: bool) -> Item {
        let item = Item {
            id: Uuid::new_v4(),
            user_id: user.id,
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            user_phone: String::new(),
            category: "Paper".into(),
            title: "Old Newspapers".into(),
            description: "Collection of newspapers from last month".into(),
            quantity: "50 kg".into(),
            location: "New York, NY".into(),
            image: None,
            points: 50,
            approved,
            status,
            created_at: Utc::now(),
        };
        ctx.items.create_item(item).await.unwrap()
    }

    #[tokio::test]
    async fn deleting_a_user_cascades_to_items_and_rewards() {
        let ctx = test_context();
        let doomed = seed_user(&ctx, "doomed@example.com").await;
        let survivor = seed_user(&ctx, "survivor@example.com").await;

        for _ in 0..3 {
            seed_item(&ctx, &doomed, ItemStatus::Pending, false).await;
        }
        let completed = seed_item(&ctx, &doomed, ItemStatus::Completed, true).await;
        ctx.rewards
            .issue_for_item(&completed)
            .await
            .unwrap();

        let kept_item = seed_item(&ctx, &survivor, ItemStatus::Pending, false).await;

        ctx.admin.delete_user(&doomed.id.to_string()).await.unwrap();

        assert!(matches!(
            ctx.auth.find_user_by_id(&doomed.id).await,
            Err(AppError::NotFoundError(_))
        ));
        assert!(ctx.items.list_by_user(&doomed.id).await.unwrap().is_empty());
        assert_eq!(
            ctx.rewards.summary_for(&doomed.id).await.unwrap().reward_count,
            0
        );

        // The other user's data is untouched
        assert_eq!(ctx.items.list_by_user(&survivor.id).await.unwrap().len(), 1);
        assert_eq!(
            ctx.items.get_item(&kept_item.id).await.unwrap().title,
            "Old Newspapers"
        );
    }

    #[tokio::test]
    async fn deleting_a_missing_user_is_not_found() {
        let ctx = test_context();
        let missing = ctx.admin.delete_user(&Uuid::new_v4().to_string()).await;
        assert!(matches!(missing, Err(AppError::NotFoundError(_))));
    }

    #[tokio::test]
    async fn stats_count_items_users_and_approval_states() {
        let ctx = test_context();
        let user = seed_user(&ctx, "jane@example.com").await;

        seed_item(&ctx, &user, ItemStatus::Pending, false).await;
        seed_item(&ctx, &user, ItemStatus::InProgress, true).await;
        seed_item(&ctx, &user, ItemStatus::Completed, true).await;

        let stats = ctx.admin.stats().await.unwrap();
        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.pending_approval, 1);
        assert_eq!(stats.completed_items, 1);
    }

    #[tokio::test]
    async fn user_rows_carry_activity_counters() {
        let ctx = test_context();
        let user = seed_user(&ctx, "jane@example.com").await;

        seed_item(&ctx, &user, ItemStatus::Pending, false).await;
        let completed = seed_item(&ctx, &user, ItemStatus::Completed, true).await;
        ctx.rewards.issue_for_item(&completed).await.unwrap();

        let rows = ctx.admin.list_users().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].items_posted, 2);
        assert_eq!(rows[0].credited_points, 50);
    }
}
