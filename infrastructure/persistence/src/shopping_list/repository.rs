use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::{ListItem, ShoppingList};
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::{ListItemEntity, ShoppingListEntity};

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, list_id: Uuid) -> Result<Vec<ListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ListItemEntity>(
            "SELECT id, name, amount, unit, comment, checked FROM list_items WHERE list_id = $1 ORDER BY sort_order ASC",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

fn db_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn get_all_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, owner_id, title, comment, created_at FROM shopping_lists WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut lists = Vec::with_capacity(entities.len());
        for entity in entities {
            let items = self.load_items(entity.id).await?;
            lists.push(entity.into_domain(items));
        }

        Ok(lists)
    }

    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, owner_id, title, comment, created_at FROM shopping_lists ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut lists = Vec::with_capacity(entities.len());
        for entity in entities {
            let items = self.load_items(entity.id).await?;
            lists.push(entity.into_domain(items));
        }

        Ok(lists)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, owner_id, title, comment, created_at FROM shopping_lists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?
        .ok_or(RepositoryError::NotFound)?;

        let items = self.load_items(entity.id).await?;
        Ok(entity.into_domain(items))
    }

    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        tracing::debug!("saving list {} ({} items)", list.id, list.products.len());

        // The list row and its item rows are written together: items are
        // rewritten in product order so the stored sequence always matches
        // the aggregate.
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query(
            r#"INSERT INTO shopping_lists (id, owner_id, title, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                comment = EXCLUDED.comment"#,
        )
        .bind(list.id)
        .bind(list.owner.as_str())
        .bind(&list.title)
        .bind(&list.comment)
        .bind(list.created_at)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        sqlx::query("DELETE FROM list_items WHERE list_id = $1")
            .bind(list.id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        for (sort_order, item) in list.products.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO list_items (id, list_id, name, amount, unit, comment, checked, sort_order)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
            )
            .bind(item.id)
            .bind(list.id)
            .bind(&item.name)
            .bind(item.amount)
            .bind(&item.unit)
            .bind(&item.comment)
            .bind(item.checked)
            .bind(sort_order as i32)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Item rows go with the list via ON DELETE CASCADE
        sqlx::query("DELETE FROM shopping_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        tracing::debug!("wiping shopping_lists and list_items");

        sqlx::query("DELETE FROM shopping_lists")
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
