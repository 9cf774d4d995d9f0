#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(|v| <$i>::from(v)).collect())
			}
		}
	)*}
}

/// Implements the shared surface of the multi geometries: a `parts` vector plus an optional,
/// equally long list of external identifiers.
#[macro_export]
macro_rules! impl_multi_geometry {
	($($t:ident,$i:ty),*) => {$(
		impl $t {
			/// Creates a multi geometry from its parts, without identifiers.
			#[must_use]
			pub fn from_parts(parts: Vec<$i>) -> Self {
				Self { parts, ids: None }
			}

			/// Attaches one identifier per part.
			///
			/// # Errors
			/// Fails with [`twkb_core::TwkbError::InconsistentIdList`] if the number of ids
			/// differs from the number of parts.
			pub fn with_ids(mut self, ids: Vec<i64>) -> anyhow::Result<Self> {
				self.set_ids(Some(ids))?;
				Ok(self)
			}

			/// Replaces the identifiers, `None` removes them.
			///
			/// # Errors
			/// Fails with [`twkb_core::TwkbError::InconsistentIdList`] if the number of ids
			/// differs from the number of parts.
			pub fn set_ids(&mut self, ids: Option<Vec<i64>>) -> anyhow::Result<()> {
				if let Some(ids) = &ids
					&& ids.len() != self.parts.len()
				{
					anyhow::bail!(twkb_core::TwkbError::InconsistentIdList {
						expected: self.parts.len(),
						actual: ids.len(),
					});
				}
				self.ids = ids;
				Ok(())
			}

			#[must_use]
			pub fn ids(&self) -> Option<&[i64]> {
				self.ids.as_deref()
			}
		}

		impl $crate::geo::CompositeGeometryTrait<$i> for $t {
			fn new() -> Self {
				Self::from_parts(Vec::new())
			}

			fn as_vec(&self) -> &Vec<$i> {
				&self.parts
			}

			/// Drops the identifiers, the number of parts may change.
			fn as_mut_vec(&mut self) -> &mut Vec<$i> {
				self.ids = None;
				&mut self.parts
			}

			fn into_inner(self) -> Vec<$i> {
				self.parts
			}
		}

		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self::from_parts(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self::from_parts(value.iter().map(|v| <$i>::from(v)).collect())
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				match &self.ids {
					None => f.debug_list().entries(&self.parts).finish(),
					Some(ids) => f.debug_map().entries(ids.iter().zip(&self.parts)).finish(),
				}
			}
		}
	)*}
}
