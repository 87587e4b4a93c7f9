use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use wayfare_core::{repository::PackageRepository, Error, PackageFields, Result, TourPackage};

pub struct PgPackageRepository {
    pool: PgPool,
}

impl PgPackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
pub(crate) struct PackageRow {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) price: f64,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) image: String,
}

impl From<PackageRow> for TourPackage {
    fn from(row: PackageRow) -> Self {
        TourPackage {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            date: row.date,
            time: row.time,
            image: row.image,
        }
    }
}

pub(crate) const SELECT_PACKAGE: &str =
    "SELECT id, title, description, price, date, time, image FROM tour_packages";

#[async_trait]
impl PackageRepository for PgPackageRepository {
    async fn list(&self) -> Result<Vec<TourPackage>> {
        let sql = format!("{SELECT_PACKAGE} ORDER BY title");
        let rows: Vec<PackageRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::store)?;

        Ok(rows.into_iter().map(TourPackage::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<TourPackage>> {
        let sql = format!("{SELECT_PACKAGE} WHERE id = $1");
        let row: Option<PackageRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::store)?;

        Ok(row.map(TourPackage::from))
    }

    async fn insert(&self, fields: PackageFields) -> Result<TourPackage> {
        let package = fields.into_package(Uuid::new_v4());

        sqlx::query(
            r#"
            INSERT INTO tour_packages (id, title, description, price, date, time, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(package.id)
        .bind(&package.title)
        .bind(&package.description)
        .bind(package.price)
        .bind(&package.date)
        .bind(&package.time)
        .bind(&package.image)
        .execute(&self.pool)
        .await
        .map_err(Error::store)?;

        Ok(package)
    }

    async fn replace(&self, id: Uuid, fields: PackageFields) -> Result<Option<TourPackage>> {
        let result = sqlx::query(
            r#"
            UPDATE tour_packages
            SET title = $1, description = $2, price = $3, date = $4, time = $5, image = $6
            WHERE id = $7
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.date)
        .bind(&fields.time)
        .bind(&fields.image)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::store)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(fields.into_package(id)))
    }

    async fn remove(&self, id: Uuid) -> Result<Option<TourPackage>> {
        // RETURNING hands back the removed record in the same statement.
        let row: Option<PackageRow> = sqlx::query_as(
            r#"
            DELETE FROM tour_packages
            WHERE id = $1
            RETURNING id, title, description, price, date, time, image
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::store)?;

        Ok(row.map(TourPackage::from))
    }
}
